//! Input grid shared by the service create and detail pages.

use leptos::prelude::*;

use super::form_field::FormField;
use crate::state::service_form::{ServiceField, ServiceForm};

#[component]
pub fn ServiceFormFields(form: RwSignal<ServiceForm>) -> impl IntoView {
    ServiceField::ALL
        .into_iter()
        .map(|field| {
            let input_type = if field.is_price() { "number" } else { "text" };
            view! {
                <FormField
                    label=field.label()
                    input_type=input_type
                    value=Signal::derive(move || form.with(|f| f.value(field).to_owned()))
                    error=Signal::derive(move || form.with(|f| f.visible_error(field)))
                    on_input=Callback::new(move |value: String| form.update(|f| f.set(field, value)))
                    on_blur=Callback::new(move |()| form.update(|f| f.touch(field)))
                />
            }
        })
        .collect_view()
}
