//! Loading, empty, error and notice blocks shared by the resource pages.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use leptos::prelude::*;

use crate::state::notice::{Notice, NoticeKind};

/// `count` grey placeholder rows shown while a list is loading.
#[component]
pub fn SkeletonRows(count: usize, #[prop(into, optional)] class: String) -> impl IntoView {
    let class = format!("skeleton {class}");
    view! {
        <div class="skeleton-list" aria-busy="true">
            {(0..count).map(|_| view! { <div class=class.clone()></div> }).collect_view()}
        </div>
    }
}

/// Static failure message for a list or detail read.
#[component]
pub fn ErrorPanel(#[prop(into)] message: String) -> impl IntoView {
    view! { <p class="panel panel--error" role="alert">{message}</p> }
}

#[component]
pub fn EmptyPanel(#[prop(into)] message: String) -> impl IntoView {
    view! { <p class="panel panel--empty">{message}</p> }
}

/// Full-page spinner.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner-page">
            <div class="spinner" aria-label="Loading"></div>
        </div>
    }
}

/// Dismissible inline notice. Renders nothing while `notice` is empty.
#[component]
pub fn NoticeBanner(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|n| {
            let role = notice_role(&n);
            view! {
                <div class=notice_class(n.kind) role=role>
                    <span class="notice__text">{n.text}</span>
                    <button class="notice__close" aria-label="Dismiss" on:click=move |_| notice.set(None)>
                        "✕"
                    </button>
                </div>
            }
        })
    }
}

fn notice_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "notice notice--success",
        NoticeKind::Error => "notice notice--error",
    }
}

fn notice_role(notice: &Notice) -> &'static str {
    if notice.is_error() { "alert" } else { "status" }
}
