//! Home page: tabbed resource lists plus logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route. Each tab mounts its own list component, so
//! switching tabs starts a fresh read and drops any response still in flight
//! for the tab being left.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::package_list::PackageList;
use crate::components::service_list::ServiceListPanel;
use crate::components::why_us_list::WhyUsList;
use crate::util::auth::{install_unauth_redirect, logout};
use crate::util::session::use_session;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HomeTab {
    #[default]
    WhyUs,
    Services,
    Packages,
}

impl HomeTab {
    pub const ALL: [Self; 3] = [Self::WhyUs, Self::Services, Self::Packages];

    pub fn label(self) -> &'static str {
        match self {
            Self::WhyUs => "Why Us",
            Self::Services => "Services",
            Self::Packages => "Packages",
        }
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate.clone());

    let active = RwSignal::new(HomeTab::default());
    let on_logout = move |_| logout(session, &navigate);

    let tabs = HomeTab::ALL
        .into_iter()
        .map(|tab| {
            view! {
                <button
                    class="nav-tab"
                    class:nav-tab--active=move || active.get() == tab
                    on:click=move |_| active.set(tab)
                >
                    {tab.label()}
                </button>
            }
        })
        .collect_view();

    let content = move || match active.get() {
        HomeTab::WhyUs => view! { <WhyUsList/> }.into_any(),
        HomeTab::Services => view! { <ServiceListPanel/> }.into_any(),
        HomeTab::Packages => view! { <PackageList/> }.into_any(),
    };

    view! {
        <div class="home-page">
            <header class="topbar">
                <span class="topbar__brand">"BubbleX"</span>
                <span class="topbar__hint">"Admin Panel"</span>
            </header>
            <main class="home-page__grid">
                <aside class="sidebar">
                    <nav class="sidebar__nav">{tabs}</nav>
                    <button class="btn sidebar__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </aside>
                <section class="home-page__content">{content}</section>
            </main>
        </div>
    }
}
