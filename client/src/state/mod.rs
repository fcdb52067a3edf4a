//! Client-side state models.
//!
//! DESIGN
//! ======
//! State is split by concern (session, gate, remote reads, toggles, forms) so
//! pages compose small models that are testable without a browser.

pub mod form;
pub mod gate;
pub mod notice;
pub mod package_form;
pub mod remote;
pub mod service_form;
pub mod services;
pub mod session;
pub mod why_us_form;
