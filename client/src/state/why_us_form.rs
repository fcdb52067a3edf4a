//! Create/edit form state for a "Why Us" highlight.
//!
//! The detail page edits the image URL through a staging dialog
//! ([`ImageEditor`]); the create page types it directly.

#[cfg(test)]
#[path = "why_us_form_test.rs"]
mod why_us_form_test;

use super::form::{self, FieldErrors, Touched};
use crate::net::types::{WhyUsDraft, WhyUsItem};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WhyUsField {
    Title,
    Image,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WhyUsForm {
    pub title: String,
    pub image: String,
    touched: Touched<WhyUsField>,
}

impl WhyUsForm {
    pub fn from_item(item: &WhyUsItem) -> Self {
        Self { title: item.title.clone(), image: item.image.clone(), touched: Touched::default() }
    }

    pub fn touch(&mut self, field: WhyUsField) {
        self.touched.touch(field);
    }

    pub fn errors(&self) -> FieldErrors<WhyUsField> {
        let mut errors = FieldErrors::new();
        form::require(&mut errors, WhyUsField::Title, &self.title);
        form::require(&mut errors, WhyUsField::Image, &self.image);
        errors
    }

    pub fn visible_error(&self, field: WhyUsField) -> Option<String> {
        let errors = self.errors();
        form::visible_error(&errors, &self.touched, &field).map(str::to_owned)
    }

    /// Touch every field and build the request body, or `None` while any error exists.
    pub fn submit(&mut self) -> Option<WhyUsDraft> {
        self.touched.touch_all();
        if !self.errors().is_empty() {
            return None;
        }
        Some(WhyUsDraft { title: self.title.trim().to_owned(), image: self.image.trim().to_owned() })
    }
}

/// Staged image URL edit. `None` while the dialog is closed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageEditor {
    staged: Option<String>,
}

impl ImageEditor {
    pub fn is_open(&self) -> bool {
        self.staged.is_some()
    }

    pub fn staged(&self) -> Option<&str> {
        self.staged.as_deref()
    }

    /// Open the dialog seeded with the current URL.
    pub fn begin(&mut self, current: &str) {
        self.staged = Some(current.to_owned());
    }

    pub fn stage(&mut self, value: String) {
        if let Some(staged) = self.staged.as_mut() {
            *staged = value;
        }
    }

    /// Close the dialog and return the trimmed URL to apply.
    pub fn confirm(&mut self) -> Option<String> {
        self.staged.take().map(|url| url.trim().to_owned())
    }

    pub fn cancel(&mut self) {
        self.staged = None;
    }
}
