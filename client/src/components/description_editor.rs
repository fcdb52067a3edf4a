//! Editable list of package description lines.

use leptos::prelude::*;

use crate::state::package_form::{MAX_DESCRIPTION_LINES, PackageForm};

/// `min_lines` lines always stay; their remove buttons are hidden.
#[component]
pub fn DescriptionEditor(form: RwSignal<PackageForm>, #[prop(optional)] min_lines: usize) -> impl IntoView {
    let line_count = Memo::new(move |_| form.with(|f| f.description.len()));
    let is_full = Memo::new(move |_| form.with(|f| f.description.is_full()));
    let can_remove = Memo::new(move |_| form.with(|f| f.description.can_remove(min_lines)));

    let rows = move || {
        (0..line_count.get())
            .map(|index| {
                view! {
                    <div class="description-line">
                        <input
                            class="field__input"
                            type="text"
                            placeholder=format!("Point {}", index + 1)
                            prop:value=move || {
                                form.with(|f| f.description.line(index).unwrap_or_default().to_owned())
                            }
                            on:input=move |ev| form.update(|f| f.description.set_line(index, event_target_value(&ev)))
                        />
                        <Show when=move || can_remove.get()>
                            <button
                                type="button"
                                class="btn btn--ghost"
                                aria-label="Remove line"
                                on:click=move |_| {
                                    form.update(|f| {
                                        if f.description.can_remove(min_lines) {
                                            f.description.remove_line(index);
                                        }
                                    });
                                }
                            >
                                "✕"
                            </button>
                        </Show>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <fieldset class="description-editor">
            <legend class="field__label">
                {move || format!("Description ({}/{MAX_DESCRIPTION_LINES})", line_count.get())}
            </legend>
            {rows}
            <button
                type="button"
                class="btn"
                disabled=move || is_full.get()
                on:click=move |_| {
                    form.update(|f| {
                        f.description.add_line();
                    });
                }
            >
                "+ Add line"
            </button>
        </fieldset>
    }
}
