//! Enable/disable switch for a service row.

use leptos::prelude::*;

/// Reports the requested state through `on_toggle`; the caller owns the value.
#[component]
pub fn StatusSwitch(
    #[prop(into)] enabled: Signal<bool>,
    #[prop(into)] pending: Signal<bool>,
    on_toggle: Callback<bool>,
    #[prop(into)] label: String,
) -> impl IntoView {
    let title = label.clone();
    view! {
        <label class="switch" class:switch--pending=move || pending.get() title=title>
            <input
                type="checkbox"
                class="switch__input"
                aria-label=label
                prop:checked=move || enabled.get()
                on:change=move |ev| on_toggle.run(event_target_checked(&ev))
            />
            <span class="switch__track"></span>
            <span class="switch__label">{move || if enabled.get() { "Enabled" } else { "Disabled" }}</span>
        </label>
    }
}
