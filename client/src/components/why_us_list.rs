//! "Why Us" highlight cards for the home page.

use leptos::prelude::*;

use super::feedback::{EmptyPanel, ErrorPanel, SkeletonRows};
use crate::routes;
use crate::state::remote::ListView;
use crate::util::remote::use_remote;
use crate::util::session::use_api;

const PLACEHOLDERS: usize = 6;

#[component]
pub fn WhyUsList() -> impl IntoView {
    let api = use_api();
    let data = use_remote(move || async move { api.list_why_us().await });

    let body = move || {
        data.with(|d| match d.list_view(PLACEHOLDERS) {
            ListView::Placeholders(n) => view! { <SkeletonRows count=n class="skeleton--card"/> }.into_any(),
            ListView::Error(_) => view! { <ErrorPanel message="Failed to load content."/> }.into_any(),
            ListView::Empty => view! { <EmptyPanel message="No items to display."/> }.into_any(),
            ListView::Rows(items) => items
                .iter()
                .map(|item| {
                    let alt = if item.title.is_empty() { "Why Us".to_owned() } else { item.title.clone() };
                    view! {
                        <a class="why-us-card" href=routes::why_us_detail(&item.id)>
                            <img class="why-us-card__image" src=item.image.clone() alt=alt loading="lazy"/>
                            <span class="why-us-card__title">{item.title.clone()}</span>
                        </a>
                    }
                })
                .collect_view()
                .into_any(),
        })
    };

    view! {
        <section class="resource-list">
            <header class="resource-list__header">
                <h2>"Why Us"</h2>
                <a class="btn btn--primary" href=routes::WHY_US_NEW aria-label="Add new Why Us">
                    "Add"
                </a>
            </header>
            <div class="resource-list__grid">{body}</div>
        </section>
    }
}
