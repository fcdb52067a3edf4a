//! Title bar with a link back to the home lists.

use leptos::prelude::*;

use crate::routes;

#[component]
pub fn PageHeader(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <header class="page-header">
            <a class="btn btn--ghost" href=routes::HOME>
                "← Back"
            </a>
            <h1 class="page-header__title">{title}</h1>
        </header>
    }
}
