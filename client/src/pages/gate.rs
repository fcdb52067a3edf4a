//! Landing route: decide between home and login, then get out of history.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::feedback::Spinner;
use crate::state::gate::AuthGate;
use crate::util::auth::replace_navigation;
use crate::util::session::use_session;

#[component]
pub fn GatePage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let gate = StoredValue::new(AuthGate::new());

    Effect::new(move || {
        let token = session.with(|s| s.token().map(str::to_owned));
        let decision = gate.try_update_value(|g| g.observe(token.as_deref()).map(|target| (g.phase(), target)));
        if let Some((phase, target)) = decision.flatten() {
            log::debug!("gate {phase:?} -> {target}");
            navigate(target, replace_navigation());
        }
    });

    view! { <Spinner/> }
}
