//! Admin sign-in with username and password.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::error::ApiError;
use crate::net::types::LoginRequest;
use crate::routes;
use crate::util::auth::replace_navigation;
use crate::util::nav::navigate_when;
#[cfg(feature = "hydrate")]
use crate::util::session::api_for;
use crate::util::session::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let signed_in = RwSignal::new(false);
    navigate_when(signed_in, routes::HOME, replace_navigation(), navigate);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_credentials(&username.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        info.set(String::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let api = api_for(session);
            leptos::task::spawn_local(async move {
                match api.login(&request).await {
                    Ok(credentials) => {
                        log::info!("signed in as {}", request.username);
                        session.update(|s| s.set_auth(credentials));
                        let _ = signed_in.try_set(true);
                    }
                    Err(e) => {
                        log::warn!("login failed: {e}");
                        let _ = info.try_set(login_failure_message(&e));
                        let _ = busy.try_set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, session);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Welcome back"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="field__label" for="login-username">
                        "Username"
                    </label>
                    <input
                        id="login-username"
                        class="login-input"
                        placeholder="Enter username"
                        autofocus=true
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <label class="field__label" for="login-password">
                        "Password"
                    </label>
                    <input
                        id="login-password"
                        class="login-input"
                        type="password"
                        placeholder="Enter password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message" role="alert">
                        {move || info.get()}
                    </p>
                </Show>
            </div>
        </div>
    }
}

/// Both fields are required; the username is trimmed, the password is sent as typed.
fn validate_credentials(username: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok(LoginRequest { username: username.to_owned(), password: password.to_owned() })
}

/// Backend message when there is one, otherwise a generic failure.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn login_failure_message(error: &ApiError) -> String {
    error.user_message("Login failed")
}
