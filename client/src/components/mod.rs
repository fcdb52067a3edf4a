//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render resource lists and form pieces while reading/writing
//! page state passed in as signals or shared through Leptos context.

pub mod description_editor;
pub mod feedback;
pub mod form_field;
pub mod image_url_dialog;
pub mod page_header;
pub mod package_list;
pub mod service_form_fields;
pub mod service_list;
pub mod status_switch;
pub mod why_us_list;
