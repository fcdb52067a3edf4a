//! Create an app service.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::feedback::NoticeBanner;
use crate::components::page_header::PageHeader;
use crate::components::service_form_fields::ServiceFormFields;
use crate::routes;
use crate::state::notice::Notice;
use crate::state::service_form::ServiceForm;
use crate::util::auth::install_unauth_redirect;
use crate::util::nav::navigate_when;
use crate::util::session::{use_api, use_session};

#[component]
pub fn ServiceNewPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate.clone());

    let api = use_api();
    let form = RwSignal::new(ServiceForm::default());
    let notice = RwSignal::new(None::<Notice>);
    let busy = RwSignal::new(false);
    let saved = RwSignal::new(false);
    navigate_when(saved, routes::HOME, NavigateOptions::default(), navigate);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(draft) = form.try_update(ServiceForm::submit).flatten() else {
            return;
        };
        busy.set(true);
        notice.set(None);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.create_service(&draft).await {
                    Ok(message) => {
                        log::info!("service {} created: {message}", draft.service_id);
                        let _ = saved.try_set(true);
                    }
                    Err(e) => {
                        let _ = notice.try_set(Some(Notice::error(e.user_message("Something went wrong."))));
                        let _ = busy.try_set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (draft, &api);
        }
    };

    view! {
        <div class="form-page">
            <PageHeader title="Add Service"/>
            <NoticeBanner notice/>
            <form class="form-card" on:submit=on_submit>
                <ServiceFormFields form/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Create service" }}
                </button>
            </form>
        </div>
    }
}
