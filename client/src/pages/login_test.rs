use super::*;

#[test]
fn validate_credentials_trims_username_only() {
    assert_eq!(
        validate_credentials("  admin ", " secret "),
        Ok(LoginRequest { username: "admin".to_owned(), password: " secret ".to_owned() })
    );
}

#[test]
fn validate_credentials_requires_both_fields() {
    assert_eq!(validate_credentials("", "secret"), Err("Enter both username and password."));
    assert_eq!(validate_credentials("   ", "secret"), Err("Enter both username and password."));
    assert_eq!(validate_credentials("admin", ""), Err("Enter both username and password."));
}

#[test]
fn login_failure_prefers_backend_message() {
    let error = ApiError::from_status(401, Some("Wrong password".to_owned()));
    assert_eq!(login_failure_message(&error), "Wrong password");
}

#[test]
fn login_refusal_without_token_shows_invalid_credentials() {
    let error = ApiError::Rejected("Invalid credentials".to_owned());
    assert_eq!(login_failure_message(&error), "Invalid credentials");
}

#[test]
fn login_transport_failure_is_generic() {
    assert_eq!(login_failure_message(&ApiError::Transport("offline".to_owned())), "Login failed");
    assert_eq!(login_failure_message(&ApiError::from_status(500, None)), "Login failed");
}
