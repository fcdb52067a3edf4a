use super::*;

#[test]
fn status_error_display_includes_message() {
    let err = ApiError::from_status(404, Some("Service not found".to_owned()));
    assert_eq!(err.to_string(), "server responded 404: Service not found");
}

#[test]
fn status_error_display_without_message() {
    let err = ApiError::from_status(500, None);
    assert_eq!(err.to_string(), "server responded 500");
}

#[test]
fn user_message_prefers_server_message() {
    let err = ApiError::from_status(401, Some("Wrong password".to_owned()));
    assert_eq!(err.user_message("Login failed"), "Wrong password");
}

#[test]
fn user_message_falls_back_for_transport_errors() {
    let err = ApiError::Transport("connection refused".to_owned());
    assert_eq!(err.user_message("Login failed"), "Login failed");
}

#[test]
fn blank_server_message_is_ignored() {
    let err = ApiError::from_status(400, Some("   ".to_owned()));
    assert_eq!(err.server_message(), None);
    assert_eq!(err.user_message("Error saving changes"), "Error saving changes");
}

#[test]
fn rejected_carries_its_message() {
    let err = ApiError::Rejected("Invalid credentials".to_owned());
    assert_eq!(err.server_message(), Some("Invalid credentials"));
    assert_eq!(err.to_string(), "Invalid credentials");
}
