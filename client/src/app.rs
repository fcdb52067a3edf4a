//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::{ParamSegment, StaticSegment};

use crate::config::{AUTH_STORAGE_KEY, api_base_url};
use crate::pages::{
    gate::GatePage, home::HomePage, login::LoginPage, package_detail::PackageDetailPage, package_new::PackageNewPage,
    service_detail::ServiceDetailPage, service_new::ServiceNewPage, why_us_detail::WhyUsDetailPage,
    why_us_new::WhyUsNewPage,
};
use crate::routes;
use crate::state::session::AppSession;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(AppSession::open(BrowserStorage, AUTH_STORAGE_KEY, api_base_url()));
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/bubblex-admin.css"/>
        <Title text="BubbleX Admin"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=routes::GATE/> }>
                <Route path=StaticSegment("") view=GatePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("home") view=HomePage/>
                <Route path=(StaticSegment("whyus"), StaticSegment("new")) view=WhyUsNewPage/>
                <Route path=(StaticSegment("whyus"), ParamSegment("id")) view=WhyUsDetailPage/>
                <Route path=StaticSegment("addservice") view=ServiceNewPage/>
                <Route path=(StaticSegment("serviceDetail"), ParamSegment("id")) view=ServiceDetailPage/>
                <Route path=StaticSegment("addpackage") view=PackageNewPage/>
                <Route path=(StaticSegment("package"), ParamSegment("id")) view=PackageDetailPage/>
            </Routes>
        </Router>
    }
}
