//! Add Food Modal
//!
//! Form for creating a new food.

use leptos::prelude::*;

use crate::components::{FoodInputs, Modal};
use crate::models::FoodFields;

/// Create dialog. Submitting hands the fields to `handle_add_food` and closes itself.
#[component]
pub fn ModalAddFood(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] set_is_open: Callback<()>,
    #[prop(into)] handle_add_food: Callback<FoodFields>,
) -> impl IntoView {
    let fields = RwSignal::new(FoodFields::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        handle_add_food.run(fields.get_untracked());
        fields.set(FoodFields::default());
        set_is_open.run(());
    };

    view! {
        <Modal is_open=is_open set_is_open=set_is_open>
            <form class="food-form" on:submit=on_submit>
                <h1>"New food"</h1>
                <FoodInputs fields=fields />
                <button type="submit" data-testid="add-food-button">
                    <p class="text">"Add food"</p>
                </button>
            </form>
        </Modal>
    }
}
