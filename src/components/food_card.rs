//! Food Card Component
//!
//! One food in the dashboard list, with edit/delete buttons and an availability switch.

use leptos::prelude::*;

use crate::models::Food;

#[component]
pub fn FoodCard(
    food: Food,
    #[prop(into)] handle_delete: Callback<u32>,
    #[prop(into)] handle_edit_food: Callback<Food>,
    #[prop(into)] handle_toggle_available: Callback<Food>,
    /// True while an availability change for this food is pending
    #[prop(into)] toggling: Signal<bool>,
) -> impl IntoView {
    let id = food.id;
    let available = food.available;
    let card_class = if available { "food-card" } else { "food-card unavailable" };
    let food_for_edit = food.clone();
    let food_for_toggle = food.clone();

    view! {
        <div class=card_class>
            <header>
                <img src=food.image.clone() alt=food.name.clone() />
            </header>
            <section class="body">
                <h2>{food.name.clone()}</h2>
                <p>{food.description.clone()}</p>
                <p class="price">"R$ " <b>{food.price.clone()}</b></p>
            </section>
            <section class="footer">
                <div class="icon-container">
                    <button
                        type="button"
                        class="icon edit"
                        data-testid=format!("edit-food-{}", id)
                        on:click=move |_| handle_edit_food.run(food_for_edit.clone())
                    >
                        "Edit"
                    </button>
                    <button
                        type="button"
                        class="icon delete"
                        data-testid=format!("remove-food-{}", id)
                        on:click=move |_| handle_delete.run(id)
                    >
                        "Delete"
                    </button>
                </div>
                <div class="availability-container">
                    <p>{if available { "Available" } else { "Unavailable" }}</p>
                    <label class="switch" for=format!("available-switch-{}", id)>
                        <input
                            id=format!("available-switch-{}", id)
                            type="checkbox"
                            prop:checked=available
                            prop:disabled=move || toggling.get()
                            data-testid=format!("change-status-food-{}", id)
                            on:click=move |ev| {
                                // Only a store change may move the switch
                                ev.prevent_default();
                                handle_toggle_available.run(food_for_toggle.clone());
                            }
                        />
                        <span class="slider" />
                    </label>
                </div>
            </section>
        </div>
    }
}
