//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Private route components apply identical signed-out redirect behavior, and
//! logout goes through one helper so the session and history stay in step.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes;
use crate::state::session::{AppSession, Session};

/// Navigation that replaces the current history entry.
pub fn replace_navigation() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Private pages require a token.
pub fn should_redirect_to_login(session: &Session) -> bool {
    !session.is_authenticated()
}

/// Redirect to `/login` whenever the session has no token.
pub fn install_unauth_redirect<F>(session: RwSignal<AppSession>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if session.with(|s| should_redirect_to_login(s.session())) {
            navigate(routes::LOGIN, replace_navigation());
        }
    });
}

/// Clear credentials and leave for `/login` without keeping the page in history.
pub fn logout<F>(session: RwSignal<AppSession>, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    session.update(AppSession::clear_auth);
    log::info!("signed out");
    navigate(routes::LOGIN, replace_navigation());
}
