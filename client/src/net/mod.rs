//! Networking modules for the admin REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `types` defines the wire schema, and `error`
//! is the shared failure type every page renders from.

pub mod api;
pub mod error;
pub mod types;
