use super::*;

#[test]
fn display_name_falls_back_for_blank_names() {
    assert_eq!(display_name("Gold"), "Gold");
    assert_eq!(display_name("  "), "Untitled Package");
}
