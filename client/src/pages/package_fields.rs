//! Name, price and description inputs shared by the package pages.

use leptos::prelude::*;

use crate::components::description_editor::DescriptionEditor;
use crate::components::form_field::FormField;
use crate::state::package_form::{PackageField, PackageForm};

#[component]
pub fn PackageFields(form: RwSignal<PackageForm>, #[prop(optional)] min_lines: usize) -> impl IntoView {
    view! {
        <FormField
            label=PackageField::Name.label()
            value=Signal::derive(move || form.with(|f| f.name.clone()))
            error=Signal::derive(move || form.with(|f| f.visible_error(PackageField::Name)))
            on_input=Callback::new(move |value: String| form.update(|f| f.name = value))
            on_blur=Callback::new(move |()| form.update(|f| f.touch(PackageField::Name)))
        />
        <FormField
            label=PackageField::Price.label()
            input_type="number"
            value=Signal::derive(move || form.with(|f| f.price.clone()))
            error=Signal::derive(move || form.with(|f| f.visible_error(PackageField::Price)))
            on_input=Callback::new(move |value: String| form.update(|f| f.price = value))
            on_blur=Callback::new(move |()| form.update(|f| f.touch(PackageField::Price)))
        />
        <DescriptionEditor form min_lines/>
    }
}
