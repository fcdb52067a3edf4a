use super::*;

#[test]
fn normalize_base_url_strips_trailing_slashes() {
    assert_eq!(normalize_base_url("https://api.example.com/v1//"), "https://api.example.com/v1");
}

#[test]
fn normalize_base_url_trims_whitespace() {
    assert_eq!(normalize_base_url("  http://host:3000/api  "), "http://host:3000/api");
}

#[test]
fn normalize_base_url_blank_falls_back_to_default() {
    assert_eq!(normalize_base_url("   "), DEFAULT_API_BASE_URL);
    assert_eq!(normalize_base_url("/"), DEFAULT_API_BASE_URL);
}

#[test]
fn api_base_url_has_no_trailing_slash() {
    let url = api_base_url();
    assert!(!url.is_empty());
    assert!(!url.ends_with('/'));
}
