//! Food Form Inputs
//!
//! Controlled inputs for the business fields of a food.

use leptos::prelude::*;

use crate::models::FoodFields;

#[component]
pub fn FoodInputs(fields: RwSignal<FoodFields>) -> impl IntoView {
    view! {
        <label class="field">
            "Image URL"
            <input
                type="text"
                name="image"
                placeholder="Paste the link here"
                prop:value=move || fields.with(|f| f.image.clone())
                on:input=move |ev| fields.update(|f| f.image = event_target_value(&ev))
            />
        </label>
        <label class="field">
            "Name"
            <input
                type="text"
                name="name"
                placeholder="e.g. Moda Italiana"
                prop:value=move || fields.with(|f| f.name.clone())
                on:input=move |ev| fields.update(|f| f.name = event_target_value(&ev))
            />
        </label>
        <label class="field">
            "Price"
            <input
                type="text"
                name="price"
                placeholder="e.g. 19.90"
                prop:value=move || fields.with(|f| f.price.clone())
                on:input=move |ev| fields.update(|f| f.price = event_target_value(&ev))
            />
        </label>
        <label class="field">
            "Description"
            <input
                type="text"
                name="description"
                placeholder="Description"
                prop:value=move || fields.with(|f| f.description.clone())
                on:input=move |ev| fields.update(|f| f.description = event_target_value(&ev))
            />
        </label>
    }
}
