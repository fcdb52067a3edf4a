//! Package rows for the home page.

#[cfg(test)]
#[path = "package_list_test.rs"]
mod package_list_test;

use leptos::prelude::*;

use super::feedback::{ErrorPanel, SkeletonRows};
use crate::routes;
use crate::state::remote::ListView;
use crate::util::remote::use_remote;
use crate::util::session::use_api;

const PLACEHOLDERS: usize = 5;

#[component]
pub fn PackageList() -> impl IntoView {
    let api = use_api();
    let data = use_remote(move || async move { api.list_packages().await });

    let body = move || {
        data.with(|d| match d.list_view(PLACEHOLDERS) {
            ListView::Placeholders(n) => view! { <SkeletonRows count=n/> }.into_any(),
            ListView::Error(_) => {
                view! { <ErrorPanel message="Failed to load packages. Please try again."/> }.into_any()
            }
            ListView::Empty => view! {
                <div class="panel panel--empty">
                    <p class="panel__title">"No packages found"</p>
                    <p class="panel__hint">"Click \u{201c}Add\u{201d} to create your first package."</p>
                </div>
            }
            .into_any(),
            ListView::Rows(packages) => packages
                .iter()
                .map(|package| {
                    view! {
                        <div class="resource-row">
                            <span class="resource-row__name" title=package.name.clone()>
                                {display_name(&package.name)}
                            </span>
                            <a class="btn" href=routes::package_detail(&package.id)>
                                "View & Edit"
                            </a>
                        </div>
                    }
                })
                .collect_view()
                .into_any(),
        })
    };

    view! {
        <section class="resource-list">
            <header class="resource-list__header">
                <h2>"Packages"</h2>
                <a class="btn btn--primary" href=routes::PACKAGE_NEW aria-label="Add package">
                    "+ Add"
                </a>
            </header>
            {body}
        </section>
    }
}

fn display_name(name: &str) -> String {
    if name.trim().is_empty() { "Untitled Package".to_owned() } else { name.to_owned() }
}
