//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (session guard, fetch-on-mount,
//! submit) and delegates rendering details to `components`.

pub mod gate;
pub mod home;
pub mod login;
pub mod package_detail;
mod package_fields;
pub mod package_new;
pub mod service_detail;
pub mod service_new;
pub mod why_us_detail;
pub mod why_us_new;
