//! Deferred navigation driven by a signal.
//!
//! Async tasks flip a flag instead of holding the router's navigate closure;
//! an effect owned by the page performs the navigation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

/// Navigate to `target` once `flag` becomes true.
pub fn navigate_when<F>(flag: RwSignal<bool>, target: &'static str, options: NavigateOptions, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        if flag.get() {
            navigate(target, options.clone());
        }
    });
}
