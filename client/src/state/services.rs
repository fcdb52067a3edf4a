//! Service list with optimistic enable/disable toggles.
//!
//! DESIGN
//! ======
//! A toggle is split into `begin_toggle` (apply locally, hand out a ticket)
//! and `settle` (keep or roll back once the backend answers). Each ticket
//! carries a per-service sequence number; only the newest ticket for a
//! service may settle it, so a slow response can never overwrite the result
//! of a later toggle on the same service.
//!
//! CONCURRENCY
//! ===========
//! [`toggle_status`] drives one toggle against any [`StateCell`]. If the cell
//! is gone when the response arrives (page unmounted), the response is
//! dropped.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use leptos::prelude::{RwSignal, Update};

use super::remote::{ListView, RemoteData};
use crate::net::error::ApiError;
use crate::net::types::{Service, ServiceStatus, StatusChange};

/// Writable state holder the toggle driver can update between awaits.
pub trait StateCell<T> {
    /// Apply `f` if the state still exists.
    fn try_modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn try_modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn try_modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// A service list held inside a page's remote read. Toggles are refused
/// until the list has loaded.
#[derive(Clone, Copy, Debug)]
pub struct LoadedServices(pub RwSignal<RemoteData<ServiceList>>);

impl StateCell<ServiceList> for LoadedServices {
    fn try_modify<R>(&self, f: impl FnOnce(&mut ServiceList) -> R) -> Option<R> {
        self.0.try_update(|data| data.ready_mut().map(f)).flatten()
    }
}

/// Handle for one in-flight toggle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleTicket {
    pub id: String,
    pub seq: u64,
    /// Status before this toggle, restored on failure.
    pub previous: ServiceStatus,
    pub target: ServiceStatus,
}

impl ToggleTicket {
    /// Request body for `POST /change-service-status`.
    pub fn request(&self) -> StatusChange {
        StatusChange { id: self.id.clone(), status: self.target }
    }
}

/// How a settled toggle ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Backend accepted; the optimistic status stays. Carries the backend message.
    Confirmed { id: String, message: String },
    /// Backend refused or was unreachable; the previous status is back.
    RolledBack { id: String, restored: ServiceStatus, error: ApiError },
    /// A newer toggle on the same service owns the outcome; this response was ignored.
    Superseded { id: String },
}

/// Loaded services plus toggle bookkeeping.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServiceList {
    services: Vec<Service>,
    latest: HashMap<String, u64>,
    next_seq: u64,
}

impl ServiceList {
    pub fn new(services: Vec<Service>) -> Self {
        Self { services, latest: HashMap::new(), next_seq: 0 }
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn get(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.key() == id)
    }

    /// Whether a toggle for `id` is awaiting its response.
    pub fn is_pending(&self, id: &str) -> bool {
        self.latest.contains_key(id)
    }

    /// Apply the target status locally and issue a ticket. `None` for unknown ids.
    pub fn begin_toggle(&mut self, id: &str, enabled: bool) -> Option<ToggleTicket> {
        let target = ServiceStatus::from_enabled(enabled);
        let service = self.services.iter_mut().find(|s| s.key() == id)?;
        let previous = service.status;
        service.status = target;

        self.next_seq += 1;
        let seq = self.next_seq;
        self.latest.insert(id.to_owned(), seq);
        Some(ToggleTicket { id: id.to_owned(), seq, previous, target })
    }

    /// Reconcile a ticket with the backend's answer.
    pub fn settle(&mut self, ticket: &ToggleTicket, result: Result<String, ApiError>) -> ToggleOutcome {
        if self.latest.get(&ticket.id) != Some(&ticket.seq) {
            log::debug!("ignoring stale toggle response for {} (seq {})", ticket.id, ticket.seq);
            return ToggleOutcome::Superseded { id: ticket.id.clone() };
        }
        self.latest.remove(&ticket.id);

        match result {
            Ok(message) => ToggleOutcome::Confirmed { id: ticket.id.clone(), message },
            Err(error) => {
                let Some(service) = self.services.iter_mut().find(|s| s.key() == ticket.id) else {
                    return ToggleOutcome::Superseded { id: ticket.id.clone() };
                };
                service.status = ticket.previous;
                log::warn!("status change for {} failed, rolled back: {error}", ticket.id);
                ToggleOutcome::RolledBack { id: ticket.id.clone(), restored: ticket.previous, error }
            }
        }
    }
}

impl RemoteData<ServiceList> {
    /// Classify for rendering; pending lists show `placeholders` skeleton rows.
    pub fn list_view(&self, placeholders: usize) -> ListView<'_, Service> {
        match self {
            Self::Idle | Self::Loading => ListView::Placeholders(placeholders),
            Self::Failed(message) => ListView::Error(message),
            Self::Ready(list) if list.services.is_empty() => ListView::Empty,
            Self::Ready(list) => ListView::Rows(&list.services),
        }
    }
}

/// Run one optimistic toggle: update `cell`, call `send`, reconcile.
///
/// The local update is visible before `send` is even invoked. Returns `None`
/// when the service is unknown or the cell was disposed mid-flight.
pub async fn toggle_status<C, F, Fut>(cell: &C, id: &str, enabled: bool, send: F) -> Option<ToggleOutcome>
where
    C: StateCell<ServiceList>,
    F: FnOnce(StatusChange) -> Fut,
    Fut: Future<Output = Result<String, ApiError>>,
{
    let ticket = cell.try_modify(|list| list.begin_toggle(id, enabled)).flatten()?;
    let result = send(ticket.request()).await;
    let outcome = cell.try_modify(move |list| list.settle(&ticket, result));
    if outcome.is_none() {
        log::debug!("service list disposed before status response for {id}");
    }
    outcome
}
