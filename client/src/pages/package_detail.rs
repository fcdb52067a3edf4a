//! View and edit one package.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::package_fields::PackageFields;
use crate::components::feedback::{ErrorPanel, NoticeBanner, Spinner};
use crate::components::page_header::PageHeader;
use crate::net::types::PackageUpdate;
use crate::routes;
use crate::state::notice::Notice;
use crate::state::package_form::PackageForm;
use crate::util::auth::install_unauth_redirect;
use crate::util::nav::navigate_when;
use crate::util::remote::use_remote;
use crate::util::session::{use_api, use_session};

#[component]
pub fn PackageDetailPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate.clone());

    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id").unwrap_or_default());
    let api = use_api();

    let data = use_remote({
        let api = api.clone();
        let id = id.clone();
        move || async move { api.fetch_package(&id).await }
    });
    let form = RwSignal::new(PackageForm::default());
    let notice = RwSignal::new(None::<Notice>);
    let busy = RwSignal::new(false);
    let saved = RwSignal::new(false);
    navigate_when(saved, routes::HOME, NavigateOptions::default(), navigate);

    Effect::new(move || {
        if let Some(package) = data.with(|d| d.ready().cloned()) {
            form.set(PackageForm::from_package(&package));
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(draft) = form.try_update(PackageForm::submit).flatten() else {
            return;
        };
        let update = PackageUpdate { draft, id: id.clone() };
        busy.set(true);
        notice.set(None);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.edit_package(&update).await {
                    Ok(message) => {
                        log::info!("package {} updated: {message}", update.id);
                        let _ = saved.try_set(true);
                    }
                    Err(e) => {
                        let _ = notice.try_set(Some(Notice::error(e.user_message("Error saving changes"))));
                        let _ = busy.try_set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (update, &api);
        }
    };

    let body = move || {
        if data.with(|d| d.is_pending()) {
            return view! { <Spinner/> }.into_any();
        }
        if data.with(|d| d.error().is_some()) {
            return view! { <ErrorPanel message="Failed to load package."/> }.into_any();
        }
        view! {
            <form class="form-card" on:submit=on_submit.clone()>
                <PackageFields form/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Save changes" }}
                </button>
            </form>
        }
        .into_any()
    };

    view! {
        <div class="form-page">
            <PageHeader title="Package"/>
            <NoticeBanner notice/>
            {body}
        </div>
    }
}
