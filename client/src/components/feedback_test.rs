use super::*;

#[test]
fn notice_class_tracks_kind() {
    assert_eq!(notice_class(Notice::success("ok").kind), "notice notice--success");
    assert_eq!(notice_class(Notice::error("no").kind), "notice notice--error");
}

#[test]
fn error_notices_are_announced_as_alerts() {
    assert_eq!(notice_role(&Notice::error("Failed")), "alert");
    assert_eq!(notice_role(&Notice::success("Saved")), "status");
}
