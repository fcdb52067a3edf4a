//! Modal dialog for staging a new image URL.

use leptos::prelude::*;

use crate::state::why_us_form::ImageEditor;

/// Shown while `editor` is open. Confirm and cancel are handled by the caller.
#[component]
pub fn ImageUrlDialog(
    editor: RwSignal<ImageEditor>,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || editor.with(ImageEditor::is_open)>
            <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                    <label class="dialog__label">
                        "Image URL"
                        <input
                            class="field__input"
                            type="url"
                            prop:value=move || editor.with(|e| e.staged().unwrap_or_default().to_owned())
                            on:input=move |ev| editor.update(|e| e.stage(event_target_value(&ev)))
                            autofocus=true
                        />
                    </label>
                    {move || {
                        editor
                            .with(|e| e.staged().map(str::trim).filter(|u| !u.is_empty()).map(str::to_owned))
                            .map(|url| view! { <img class="dialog__preview" src=url alt="Preview"/> })
                    }}
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" on:click=move |_| on_confirm.run(())>
                            "Apply"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
