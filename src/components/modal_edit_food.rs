//! Edit Food Modal
//!
//! Form pre-populated with the food selected for editing.

use leptos::prelude::*;

use crate::components::{FoodInputs, Modal};
use crate::models::{Food, FoodFields};

#[component]
pub fn ModalEditFood(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] set_is_open: Callback<()>,
    #[prop(into)] editing_food: Signal<Option<Food>>,
    #[prop(into)] handle_update_food: Callback<FoodFields>,
) -> impl IntoView {
    let fields = RwSignal::new(FoodFields::default());

    // Re-populate whenever a different food is selected
    Effect::new(move |_| {
        if let Some(food) = editing_food.get() {
            fields.set(FoodFields::from(&food));
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        handle_update_food.run(fields.get_untracked());
        set_is_open.run(());
    };

    view! {
        <Modal is_open=is_open set_is_open=set_is_open>
            <form class="food-form" on:submit=on_submit>
                <h1>"Edit food"</h1>
                <FoodInputs fields=fields />
                <button type="submit" data-testid="edit-food-button">
                    <p class="text">"Save changes"</p>
                </button>
            </form>
        </Modal>
    }
}
