//! Create a "Why Us" highlight.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::feedback::NoticeBanner;
use crate::components::form_field::FormField;
use crate::components::page_header::PageHeader;
use crate::routes;
use crate::state::notice::Notice;
use crate::state::why_us_form::{WhyUsField, WhyUsForm};
use crate::util::auth::install_unauth_redirect;
use crate::util::nav::navigate_when;
use crate::util::session::{use_api, use_session};

#[component]
pub fn WhyUsNewPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate.clone());

    let api = use_api();
    let form = RwSignal::new(WhyUsForm::default());
    let notice = RwSignal::new(None::<Notice>);
    let busy = RwSignal::new(false);
    let saved = RwSignal::new(false);
    navigate_when(saved, routes::HOME, NavigateOptions::default(), navigate);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(draft) = form.try_update(WhyUsForm::submit).flatten() else {
            return;
        };
        busy.set(true);
        notice.set(None);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.create_why_us(&draft).await {
                    Ok(message) => {
                        log::info!("why-us created: {message}");
                        let _ = saved.try_set(true);
                    }
                    Err(e) => {
                        let _ = notice.try_set(Some(Notice::error(e.user_message("Failed to add item."))));
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
            <PageHeader title="Add Why Us"/>
            <NoticeBanner notice/>
            <form class="form-card" on:submit=on_submit>
                <FormField
                    label="Title"
                    value=Signal::derive(move || form.with(|f| f.title.clone()))
                    error=Signal::derive(move || form.with(|f| f.visible_error(WhyUsField::Title)))
                    on_input=Callback::new(move |value: String| form.update(|f| f.title = value))
                    on_blur=Callback::new(move |()| form.update(|f| f.touch(WhyUsField::Title)))
                />
                <FormField
                    label="Image URL"
                    input_type="url"
                    placeholder="https://"
                    value=Signal::derive(move || form.with(|f| f.image.clone()))
                    error=Signal::derive(move || form.with(|f| f.visible_error(WhyUsField::Image)))
                    on_input=Callback::new(move |value: String| form.update(|f| f.image = value))
                    on_blur=Callback::new(move |()| form.update(|f| f.touch(WhyUsField::Image)))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Create" }}
                </button>
            </form>
        </div>
    }
}
