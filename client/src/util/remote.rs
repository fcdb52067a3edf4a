//! Fetch-on-mount hook built on [`RemoteData`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Every list and detail page calls [`use_remote`] once from its component
//! body. The request runs on the browser only; the server render shows the
//! pending state.

use std::future::Future;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::state::remote::{MountGuard, RemoteData};

/// Start one read for the current view and expose its lifecycle.
///
/// The response is dropped if the view is cleaned up before it arrives.
pub fn use_remote<T, F, Fut>(fetch: F) -> RwSignal<RemoteData<T>>
where
    T: Send + Sync + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let data = RwSignal::new(RemoteData::Idle);
    let guard = MountGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.release()
    });

    #[cfg(feature = "hydrate")]
    {
        data.set(RemoteData::Loading);
        leptos::task::spawn_local(async move {
            let result = fetch().await;
            if let Err(e) = &result {
                log::warn!("remote read failed: {e}");
            }
            guard.deliver(|| {
                let _ = data.try_set(RemoteData::from_result(result));
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (fetch, guard);
    }

    data
}
