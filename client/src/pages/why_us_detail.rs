//! View and edit one "Why Us" highlight.
//!
//! The image URL is changed through a staging dialog so a half-typed URL
//! never replaces the preview until the user confirms it.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::feedback::{ErrorPanel, NoticeBanner, Spinner};
use crate::components::form_field::FormField;
use crate::components::image_url_dialog::ImageUrlDialog;
use crate::components::page_header::PageHeader;
use crate::net::types::WhyUsUpdate;
use crate::routes;
use crate::state::notice::Notice;
use crate::state::why_us_form::{ImageEditor, WhyUsField, WhyUsForm};
use crate::util::auth::install_unauth_redirect;
use crate::util::nav::navigate_when;
use crate::util::remote::use_remote;
use crate::util::session::{use_api, use_session};

#[component]
pub fn WhyUsDetailPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate.clone());

    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id").unwrap_or_default());
    let api = use_api();

    let data = use_remote({
        let api = api.clone();
        let id = id.clone();
        move || async move { api.fetch_why_us(&id).await }
    });
    let form = RwSignal::new(WhyUsForm::default());
    let editor = RwSignal::new(ImageEditor::default());
    let notice = RwSignal::new(None::<Notice>);
    let busy = RwSignal::new(false);
    let saved = RwSignal::new(false);
    navigate_when(saved, routes::HOME, NavigateOptions::default(), navigate);

    Effect::new(move || {
        if let Some(item) = data.with(|d| d.ready().cloned()) {
            form.set(WhyUsForm::from_item(&item));
        }
    });

    let on_edit_image = move |_| editor.update(|e| e.begin(&form.with_untracked(|f| f.image.clone())));
    let on_cancel = Callback::new(move |()| editor.update(ImageEditor::cancel));
    let on_confirm = Callback::new(move |()| {
        if let Some(url) = editor.try_update(ImageEditor::confirm).flatten() {
            form.update(|f| {
                f.image = url;
                f.touch(WhyUsField::Image);
            });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(draft) = form.try_update(WhyUsForm::submit).flatten() else {
            return;
        };
        let update = WhyUsUpdate { id: id.clone(), title: draft.title, image: draft.image };
        busy.set(true);
        notice.set(None);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.update_why_us(&update).await {
                    Ok(message) => {
                        log::info!("why-us {} updated: {message}", update.id);
                        let _ = saved.try_set(true);
                    }
                    Err(e) => {
                        let _ = notice.try_set(Some(Notice::error(e.user_message("Failed to save changes."))));
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
            return view! { <ErrorPanel message="Something went wrong while fetching the item."/> }.into_any();
        }
        view! {
            <form class="form-card" on:submit=on_submit.clone()>
                <figure class="image-preview">
                    <img src=move || form.with(|f| f.image.clone()) alt=move || form.with(|f| f.title.clone())/>
                    <button type="button" class="btn" on:click=on_edit_image>
                        "Change image"
                    </button>
                    {move || {
                        form.with(|f| f.visible_error(WhyUsField::Image))
                            .map(|m| view! { <span class="field__error">{m}</span> })
                    }}
                </figure>
                <FormField
                    label="Title"
                    value=Signal::derive(move || form.with(|f| f.title.clone()))
                    error=Signal::derive(move || form.with(|f| f.visible_error(WhyUsField::Title)))
                    on_input=Callback::new(move |value: String| form.update(|f| f.title = value))
                    on_blur=Callback::new(move |()| form.update(|f| f.touch(WhyUsField::Title)))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Save changes" }}
                </button>
            </form>
        }
        .into_any()
    };

    view! {
        <div class="form-page">
            <PageHeader title="Why Us"/>
            <NoticeBanner notice/>
            {body}
            <ImageUrlDialog editor on_cancel on_confirm/>
        </div>
    }
}
