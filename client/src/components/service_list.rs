//! Service rows with optimistic enable/disable switches.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list lives inside the page's remote read. Each switch flip runs
//! [`toggle_status`] against it: the row changes immediately and is rolled
//! back if the backend refuses. Outcomes surface through the notice banner.

#[cfg(test)]
#[path = "service_list_test.rs"]
mod service_list_test;

use leptos::prelude::*;

use super::feedback::{EmptyPanel, ErrorPanel, NoticeBanner, SkeletonRows};
use super::status_switch::StatusSwitch;
use crate::routes;
use crate::state::notice::Notice;
use crate::state::remote::{ListView, RemoteData};
use crate::state::services::{ServiceList, ToggleOutcome};
use crate::util::remote::use_remote;
use crate::util::session::use_api;

const PLACEHOLDERS: usize = 3;

#[component]
pub fn ServiceListPanel() -> impl IntoView {
    let api = use_api();
    let fetch_api = api.clone();
    let data = use_remote(move || async move { fetch_api.list_services().await.map(ServiceList::new) });
    let notice = RwSignal::new(None::<Notice>);

    let on_toggle = Callback::new(move |(id, enabled): (String, bool)| {
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let cell = crate::state::services::LoadedServices(data);
                let outcome = crate::state::services::toggle_status(&cell, &id, enabled, |change| async move {
                    api.change_service_status(&change).await
                })
                .await;
                if let Some(next) = outcome.and_then(toggle_notice) {
                    let _ = notice.try_set(Some(next));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, id, enabled, notice);
        }
    });

    let ids = Memo::new(move |_| {
        data.with(|d| {
            d.ready()
                .map(|list| list.services().iter().map(|s| s.key().to_owned()).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    });

    let shape = Memo::new(move |_| data.with(|d| ListShape::of(&d.list_view(PLACEHOLDERS))));

    let body = move || match shape.get() {
        ListShape::Placeholders(n) => view! { <SkeletonRows count=n/> }.into_any(),
        ListShape::Error => view! { <ErrorPanel message="Failed to load services."/> }.into_any(),
        ListShape::Empty => view! { <EmptyPanel message="No services found."/> }.into_any(),
        ListShape::Rows => view! {
            <For
                each=move || ids.get()
                key=|id| id.clone()
                children=move |id| view! { <ServiceRow data id on_toggle/> }
            />
        }
        .into_any(),
    };

    view! {
        <section class="resource-list">
            <header class="resource-list__header">
                <h2>"App Services"</h2>
                <a class="btn btn--primary" href=routes::SERVICE_NEW aria-label="Add service">
                    "+ Add"
                </a>
            </header>
            <NoticeBanner notice/>
            {body}
        </section>
    }
}

#[component]
fn ServiceRow(
    data: RwSignal<RemoteData<ServiceList>>,
    id: String,
    on_toggle: Callback<(String, bool)>,
) -> impl IntoView {
    let name = data.with_untracked(|d| {
        d.ready().and_then(|list| list.get(&id)).map(|s| s.name.clone()).unwrap_or_default()
    });
    let enabled = Signal::derive({
        let id = id.clone();
        move || data.with(|d| d.ready().and_then(|list| list.get(&id)).is_some_and(|s| s.status.is_enabled()))
    });
    let pending = Signal::derive({
        let id = id.clone();
        move || data.with(|d| d.ready().is_some_and(|list| list.is_pending(&id)))
    });
    let href = routes::service_detail(&id);
    let label = format!("Toggle {}", display_name(&name));

    view! {
        <div class="resource-row">
            <span class="resource-row__name">{display_name(&name)}</span>
            <div class="resource-row__actions">
                <StatusSwitch
                    enabled
                    pending
                    label
                    on_toggle=Callback::new(move |next: bool| on_toggle.run((id.clone(), next)))
                />
                <a class="btn" href=href aria-label="View details">
                    "View"
                </a>
            </div>
        </div>
    }
}

/// Branch of the list to render, independent of row contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ListShape {
    Placeholders(usize),
    Error,
    Empty,
    Rows,
}

impl ListShape {
    fn of<T>(view: &ListView<'_, T>) -> Self {
        match view {
            ListView::Placeholders(n) => Self::Placeholders(*n),
            ListView::Error(_) => Self::Error,
            ListView::Empty => Self::Empty,
            ListView::Rows(_) => Self::Rows,
        }
    }
}

fn display_name(name: &str) -> String {
    if name.trim().is_empty() { "Untitled".to_owned() } else { name.to_owned() }
}

/// Banner text for a settled toggle. Superseded toggles stay silent.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn toggle_notice(outcome: ToggleOutcome) -> Option<Notice> {
    match outcome {
        ToggleOutcome::Confirmed { message, .. } => {
            let text = if message.trim().is_empty() { "Status updated".to_owned() } else { message };
            Some(Notice::success(text))
        }
        ToggleOutcome::RolledBack { error, .. } => Some(Notice::error(error.user_message("Failed to update status"))),
        ToggleOutcome::Superseded { .. } => None,
    }
}
