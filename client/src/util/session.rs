//! Context accessors for the app-wide session.

use leptos::prelude::*;

use crate::net::api::AdminApi;
use crate::state::session::AppSession;

/// The session provided by `App`.
pub fn use_session() -> RwSignal<AppSession> {
    expect_context::<RwSignal<AppSession>>()
}

/// API handle bound to the session's base URL.
pub fn api_for(session: RwSignal<AppSession>) -> AdminApi {
    session.with_untracked(|s| AdminApi::new(s.base_url()))
}

pub fn use_api() -> AdminApi {
    api_for(use_session())
}
