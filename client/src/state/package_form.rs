//! Create/edit form state for a package and its description lines.
//!
//! DESIGN
//! ======
//! Description lines are an ordered list capped at [`MAX_DESCRIPTION_LINES`].
//! Adding past the cap is refused rather than truncated; removing a line
//! keeps the relative order of the rest. Lines are sent as typed.

#[cfg(test)]
#[path = "package_form_test.rs"]
mod package_form_test;

use super::form::{self, FieldErrors, Touched};
use crate::net::types::{Package, PackageDraft};

pub const MAX_DESCRIPTION_LINES: usize = 5;

/// Ordered description lines, at most [`MAX_DESCRIPTION_LINES`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DescriptionLines(Vec<String>);

impl DescriptionLines {
    /// Keeps the first [`MAX_DESCRIPTION_LINES`] entries of `lines`.
    pub fn from_lines(mut lines: Vec<String>) -> Self {
        lines.truncate(MAX_DESCRIPTION_LINES);
        Self(lines)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.0.len() >= MAX_DESCRIPTION_LINES
    }

    pub fn lines(&self) -> &[String] {
        &self.0
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Append an empty line. Returns `false` when already full.
    pub fn add_line(&mut self) -> bool {
        if self.is_full() {
            return false;
        }
        self.0.push(String::new());
        true
    }

    /// Whether a line may be removed while keeping at least `min_lines`.
    pub fn can_remove(&self, min_lines: usize) -> bool {
        self.0.len() > min_lines
    }

    /// Remove exactly line `index`. Out-of-range indices are ignored.
    pub fn remove_line(&mut self, index: usize) -> Option<String> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    pub fn set_line(&mut self, index: usize, value: String) {
        if let Some(slot) = self.0.get_mut(index) {
            *slot = value;
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PackageField {
    Name,
    Price,
}

impl PackageField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Package name",
            Self::Price => "Price",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PackageForm {
    pub name: String,
    pub price: String,
    pub description: DescriptionLines,
    touched: Touched<PackageField>,
}

impl Default for PackageForm {
    /// Blank create form with one empty description line.
    fn default() -> Self {
        Self {
            name: String::new(),
            price: String::new(),
            description: DescriptionLines(vec![String::new()]),
            touched: Touched::default(),
        }
    }
}

impl PackageForm {
    pub fn from_package(package: &Package) -> Self {
        Self {
            name: package.name.clone(),
            price: form::format_number(package.price),
            description: DescriptionLines::from_lines(package.description.clone()),
            touched: Touched::default(),
        }
    }

    pub fn touch(&mut self, field: PackageField) {
        self.touched.touch(field);
    }

    pub fn errors(&self) -> FieldErrors<PackageField> {
        let mut errors = FieldErrors::new();
        form::require(&mut errors, PackageField::Name, &self.name);
        form::check_non_negative(&mut errors, PackageField::Price, &self.price, PackageField::Price.label());
        errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    pub fn visible_error(&self, field: PackageField) -> Option<String> {
        let errors = self.errors();
        form::visible_error(&errors, &self.touched, &field).map(str::to_owned)
    }

    /// Touch every field and build the request body, or `None` while any error exists.
    pub fn submit(&mut self) -> Option<PackageDraft> {
        self.touched.touch_all();
        let price = form::parse_non_negative(&self.price, PackageField::Price.label()).ok()?;
        if !self.is_valid() {
            return None;
        }
        Some(PackageDraft {
            name: self.name.trim().to_owned(),
            price,
            description: self.description.lines().to_vec(),
        })
    }
}
