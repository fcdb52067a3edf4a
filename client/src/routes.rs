//! Route paths shared by the router, the auth gate, and navigation actions.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const GATE: &str = "/";
pub const LOGIN: &str = "/login";
pub const HOME: &str = "/home";
pub const WHY_US_NEW: &str = "/whyus/new";
pub const SERVICE_NEW: &str = "/addservice";
pub const PACKAGE_NEW: &str = "/addpackage";

pub fn why_us_detail(id: &str) -> String {
    format!("/whyus/{id}")
}

pub fn service_detail(id: &str) -> String {
    format!("/serviceDetail/{id}")
}

pub fn package_detail(id: &str) -> String {
    format!("/package/{id}")
}
