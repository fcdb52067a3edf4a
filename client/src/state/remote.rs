//! Remote-resource state shared by every list and detail page.
//!
//! DESIGN
//! ======
//! One `RemoteData<T>` replaces the per-page loading/error/data triad. A
//! `MountGuard` ties an in-flight request to the view that started it: once
//! the view is cleaned up the guard is released and the late response is
//! dropped instead of being written into disposed state.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::net::error::ApiError;

/// Lifecycle of one backend read.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RemoteData<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    /// Failure detail for logs; lists render their own static text instead.
    Failed(String),
}

impl<T> RemoteData<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    /// Idle counts as pending: the first render happens before the fetch starts.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Idle | Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// What a list view should render for its current data.
#[derive(Debug, PartialEq)]
pub enum ListView<'a, T> {
    Placeholders(usize),
    Error(&'a str),
    Empty,
    Rows(&'a [T]),
}

impl<T> RemoteData<Vec<T>> {
    /// Classify for rendering; pending lists show `placeholders` skeleton rows.
    pub fn list_view(&self, placeholders: usize) -> ListView<'_, T> {
        match self {
            Self::Idle | Self::Loading => ListView::Placeholders(placeholders),
            Self::Failed(message) => ListView::Error(message),
            Self::Ready(items) if items.is_empty() => ListView::Empty,
            Self::Ready(items) => ListView::Rows(items),
        }
    }
}

/// Liveness flag for a mounted view. Clones share the flag.
#[derive(Clone, Debug)]
pub struct MountGuard(Arc<AtomicBool>);

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl MountGuard {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Mark the view as gone. Idempotent.
    pub fn release(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    /// Run `apply` only while the view is alive. Returns whether it ran.
    pub fn deliver<F: FnOnce()>(&self, apply: F) -> bool {
        if self.is_alive() {
            apply();
            true
        } else {
            log::debug!("discarding response for an unmounted view");
            false
        }
    }
}
