//! Dashboard Page
//!
//! Lists foods and wires the header, modals and cards to the food API.
//! Each mutation is sent to the server first, then reconciled into the store
//! by id, without re-fetching the collection.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::components::{FoodCard, Header, ModalAddFood, ModalEditFood};
use crate::context::use_api;
use crate::models::{Food, FoodFields};
use crate::store::{
    store_apply_created, store_apply_deleted, store_apply_loaded, store_apply_toggled,
    store_apply_updated, store_begin_toggle, store_food, store_is_toggling,
    store_select_for_edit, store_toggle_create_modal, store_toggle_edit_modal,
    use_dashboard_store, DashboardStateStoreFields,
};

#[component]
pub fn Dashboard() -> impl IntoView {
    let store = use_dashboard_store();
    let ctx = use_api();

    // Load foods on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let result = actions::load_foods(&ctx.api()).await;
            store_apply_loaded(&store, result);
        });
    });

    let handle_add_food = Callback::new(move |fields: FoodFields| {
        spawn_local(async move {
            let result = actions::create_food(&ctx.api(), fields).await;
            store_apply_created(&store, result);
        });
    });

    let handle_update_food = Callback::new(move |fields: FoodFields| {
        // Selection is read now; a later selection must not redirect this update
        let selected = store.editing_food().get_untracked();
        spawn_local(async move {
            let result = actions::update_food(&ctx.api(), selected.as_ref(), fields).await;
            store_apply_updated(&store, result);
        });
    });

    let handle_delete_food = Callback::new(move |id: u32| {
        spawn_local(async move {
            let result = actions::delete_food(&ctx.api(), id).await;
            store_apply_deleted(&store, id, result);
        });
    });

    let handle_toggle_available = Callback::new(move |food: Food| {
        // The card may hold a stale copy; flip the stored record instead
        let food = store_food(&store, food.id).unwrap_or(food);
        if !store_begin_toggle(&store, food.id) {
            log::debug!("[DASHBOARD] Toggle already pending for food {}", food.id);
            return;
        }
        spawn_local(async move {
            let result = actions::toggle_available(&ctx.api(), &food).await;
            store_apply_toggled(&store, food.id, result);
        });
    });

    let toggle_modal = Callback::new(move |_: ()| store_toggle_create_modal(&store));
    let toggle_edit_modal = Callback::new(move |_: ()| store_toggle_edit_modal(&store));
    let handle_edit_food = Callback::new(move |food: Food| store_select_for_edit(&store, food));

    let modal_open = Signal::derive(move || store.create_modal().get().is_open());
    let edit_modal_open = Signal::derive(move || store.edit_modal().get().is_open());
    let editing_food = Signal::derive(move || store.editing_food().get());

    view! {
        <Header open_modal=toggle_modal />
        <ModalAddFood
            is_open=modal_open
            set_is_open=toggle_modal
            handle_add_food=handle_add_food
        />
        <ModalEditFood
            is_open=edit_modal_open
            set_is_open=toggle_edit_modal
            editing_food=editing_food
            handle_update_food=handle_update_food
        />

        <div class="foods-container" data-testid="foods-list">
            <For
                each=move || store.foods().get().to_vec()
                // Whole record as key so an edited food re-renders
                key=|food| food.clone()
                children=move |food| {
                    let id = food.id;
                    let toggling = Signal::derive(move || store_is_toggling(&store, id));
                    view! {
                        <FoodCard
                            food=food
                            handle_delete=handle_delete_food
                            handle_edit_food=handle_edit_food
                            handle_toggle_available=handle_toggle_available
                            toggling=toggling
                        />
                    }
                }
            />
        </div>
    }
}
