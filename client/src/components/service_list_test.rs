use super::*;
use crate::net::error::ApiError;
use crate::net::types::ServiceStatus;

#[test]
fn confirmed_toggle_shows_backend_message() {
    let outcome = ToggleOutcome::Confirmed { id: "s1".to_owned(), message: "Service disabled".to_owned() };
    assert_eq!(toggle_notice(outcome), Some(Notice::success("Service disabled")));
}

#[test]
fn confirmed_toggle_without_message_uses_default() {
    let outcome = ToggleOutcome::Confirmed { id: "s1".to_owned(), message: String::new() };
    assert_eq!(toggle_notice(outcome), Some(Notice::success("Status updated")));
}

#[test]
fn rolled_back_toggle_prefers_backend_message() {
    let outcome = ToggleOutcome::RolledBack {
        id: "s1".to_owned(),
        restored: ServiceStatus::Enabled,
        error: ApiError::from_status(409, Some("Service locked".to_owned())),
    };
    assert_eq!(toggle_notice(outcome), Some(Notice::error("Service locked")));
}

#[test]
fn rolled_back_transport_failure_uses_fallback() {
    let outcome = ToggleOutcome::RolledBack {
        id: "s1".to_owned(),
        restored: ServiceStatus::Disabled,
        error: ApiError::Transport("offline".to_owned()),
    };
    assert_eq!(toggle_notice(outcome), Some(Notice::error("Failed to update status")));
}

#[test]
fn superseded_toggle_is_silent() {
    assert_eq!(toggle_notice(ToggleOutcome::Superseded { id: "s1".to_owned() }), None);
}

#[test]
fn display_name_falls_back_for_blank_names() {
    assert_eq!(display_name(""), "Untitled");
}

#[test]
fn list_shape_ignores_row_contents() {
    let rows = [1, 2];
    assert_eq!(ListShape::of(&ListView::Rows(&rows[..])), ListShape::Rows);
    assert_eq!(ListShape::of(&ListView::<u8>::Placeholders(3)), ListShape::Placeholders(3));
    assert_eq!(ListShape::of(&ListView::<u8>::Error("x")), ListShape::Error);
}
