//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! The `store_apply_*` functions reconcile API results: success updates the
//! matching field by id, failure is logged and leaves the store untouched.

use std::collections::BTreeSet;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiResult;
use crate::collection::FoodCollection;
use crate::models::Food;

/// Visibility of one modal. Each modal only changes on explicit toggles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

impl ModalState {
    pub fn toggle(&mut self) {
        *self = match self {
            ModalState::Closed => ModalState::Open,
            ModalState::Open => ModalState::Closed,
        };
    }

    pub fn is_open(&self) -> bool {
        *self == ModalState::Open
    }
}

/// Dashboard view state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Foods as last reconciled with the server
    pub foods: FoodCollection,
    /// Food being edited (None until something is selected)
    pub editing_food: Option<Food>,
    pub create_modal: ModalState,
    pub edit_modal: ModalState,
    /// Ids with an availability toggle in flight
    pub toggling: BTreeSet<u32>,
}

pub type DashboardStore = Store<DashboardState>;

/// Dashboard store provided by `App`
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

/// Current record for an id, if still listed
pub fn store_food(store: &DashboardStore, food_id: u32) -> Option<Food> {
    store.foods().with_untracked(|foods| foods.get(food_id).cloned())
}

pub fn store_toggle_create_modal(store: &DashboardStore) {
    store.create_modal().write().toggle();
}

pub fn store_toggle_edit_modal(store: &DashboardStore) {
    store.edit_modal().write().toggle();
}

/// Select a food for editing and flip the edit modal
pub fn store_select_for_edit(store: &DashboardStore, food: Food) {
    store.editing_food().set(Some(food));
    store_toggle_edit_modal(store);
}

/// Replace the whole collection after a load
pub fn store_apply_loaded(store: &DashboardStore, result: ApiResult<FoodCollection>) {
    match result {
        Ok(foods) => {
            log::debug!("[DASHBOARD] Loaded {} foods", foods.len());
            store.foods().set(foods);
        }
        Err(err) => log::error!("[DASHBOARD] Failed to load foods: {}", err),
    }
}

/// Append a newly created food and clear the edit selection
pub fn store_apply_created(store: &DashboardStore, result: ApiResult<Food>) {
    match result {
        Ok(food) => {
            log::debug!("[DASHBOARD] Created food {}", food.id);
            store.foods().write().append(food);
            store.editing_food().set(None);
        }
        Err(err) => log::error!("[DASHBOARD] Failed to create food: {}", err),
    }
}

/// Replace an edited food by id. A food deleted meanwhile stays deleted.
pub fn store_apply_updated(store: &DashboardStore, result: ApiResult<Food>) {
    match result {
        Ok(food) => {
            store.foods().write().replace(food);
        }
        Err(err) => log::error!("[DASHBOARD] Failed to update food: {}", err),
    }
}

pub fn store_apply_deleted(store: &DashboardStore, food_id: u32, result: ApiResult<u32>) {
    match result {
        Ok(id) => {
            store.foods().write().remove(id);
        }
        Err(err) => log::error!("[DASHBOARD] Failed to delete food {}: {}", food_id, err),
    }
}

/// Mark an availability toggle as in flight. Returns false if one already is.
pub fn store_begin_toggle(store: &DashboardStore, food_id: u32) -> bool {
    store.toggling().write().insert(food_id)
}

pub fn store_is_toggling(store: &DashboardStore, food_id: u32) -> bool {
    store.toggling().with(|ids| ids.contains(&food_id))
}

/// Finish an availability toggle started with `store_begin_toggle`
pub fn store_apply_toggled(store: &DashboardStore, food_id: u32, result: ApiResult<Food>) {
    store.toggling().write().remove(&food_id);
    match result {
        Ok(food) => {
            store.foods().write().replace(food);
        }
        Err(err) => log::error!("[DASHBOARD] Failed to toggle food {}: {}", food_id, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;

    fn food(id: u32, name: &str, available: bool) -> Food {
        Food {
            id,
            name: name.to_string(),
            image: format!("{}.png", name),
            price: "10.00".to_string(),
            description: String::new(),
            available,
        }
    }

    fn server_error() -> ApiError {
        ApiError::Http {
            status: 500,
            message: "Internal Server Error".to_string(),
        }
    }

    fn loaded_store() -> DashboardStore {
        let store = Store::new(DashboardState::default());
        store_apply_loaded(
            &store,
            Ok(FoodCollection::from(vec![
                food(1, "a", true),
                food(7, "b", true),
                food(3, "c", false),
            ])),
        );
        store
    }

    fn ids(store: &DashboardStore) -> Vec<u32> {
        store.foods().with_untracked(|foods| foods.ids())
    }

    #[test]
    fn test_modals_start_closed() {
        let state = DashboardState::default();
        assert!(!state.create_modal.is_open());
        assert!(!state.edit_modal.is_open());
        assert!(state.editing_food.is_none());
        assert!(state.foods.is_empty());
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut modal = ModalState::default();
        modal.toggle();
        assert!(modal.is_open());
        modal.toggle();
        assert_eq!(modal, ModalState::Closed);
    }

    #[test]
    fn test_modals_are_independent() {
        Owner::new().with(|| {
            let store = Store::new(DashboardState::default());
            store_toggle_create_modal(&store);
            assert!(store.create_modal().get_untracked().is_open());
            assert!(!store.edit_modal().get_untracked().is_open());

            store_toggle_edit_modal(&store);
            store_toggle_create_modal(&store);
            assert!(!store.create_modal().get_untracked().is_open());
            assert!(store.edit_modal().get_untracked().is_open());
        });
    }

    #[test]
    fn test_load_failure_keeps_previous_foods() {
        Owner::new().with(|| {
            let store = loaded_store();
            store_apply_loaded(&store, Err(server_error()));
            assert_eq!(ids(&store), vec![1, 7, 3]);

            let empty = Store::new(DashboardState::default());
            store_apply_loaded(&empty, Err(server_error()));
            assert!(empty.foods().with_untracked(|foods| foods.is_empty()));
        });
    }

    #[test]
    fn test_select_then_create_clears_selection() {
        Owner::new().with(|| {
            let store = loaded_store();
            store_select_for_edit(&store, food(7, "b", true));
            assert!(store.edit_modal().get_untracked().is_open());
            assert_eq!(store.editing_food().get_untracked().map(|f| f.id), Some(7));

            let created = food(5, "Pizza", true);
            store_apply_created(&store, Ok(created.clone()));
            assert_eq!(ids(&store), vec![1, 7, 3, 5]);
            assert_eq!(store_food(&store, 5), Some(created));
            assert!(store.editing_food().get_untracked().is_none());
            assert!(!store.create_modal().get_untracked().is_open());
        });
    }

    #[test]
    fn test_create_failure_keeps_selection() {
        Owner::new().with(|| {
            let store = loaded_store();
            store_select_for_edit(&store, food(7, "b", true));
            store_apply_created(&store, Err(server_error()));
            assert_eq!(ids(&store), vec![1, 7, 3]);
            assert!(store.editing_food().get_untracked().is_some());
        });
    }

    #[test]
    fn test_update_replaces_in_place() {
        Owner::new().with(|| {
            let store = loaded_store();
            store_apply_updated(&store, Ok(food(3, "New", false)));
            assert_eq!(ids(&store), vec![1, 7, 3]);
            assert_eq!(store_food(&store, 3).map(|f| f.name), Some("New".to_string()));

            store_apply_updated(&store, Err(server_error()));
            store_apply_updated(&store, Ok(food(42, "ghost", true)));
            assert_eq!(ids(&store), vec![1, 7, 3]);
        });
    }

    #[test]
    fn test_delete_keeps_others_in_order() {
        Owner::new().with(|| {
            let store = loaded_store();
            store_apply_deleted(&store, 7, Err(server_error()));
            assert_eq!(ids(&store), vec![1, 7, 3]);

            store_apply_deleted(&store, 7, Ok(7));
            assert_eq!(ids(&store), vec![1, 3]);
            assert_eq!(store_food(&store, 3), Some(food(3, "c", false)));
        });
    }

    #[test]
    fn test_toggle_in_flight_is_exclusive() {
        Owner::new().with(|| {
            let store = loaded_store();
            assert!(store_begin_toggle(&store, 1));
            assert!(!store_begin_toggle(&store, 1));
            assert!(store_is_toggling(&store, 1));

            store_apply_toggled(&store, 1, Ok(food(1, "a", false)));
            assert!(!store_is_toggling(&store, 1));
            assert_eq!(store_food(&store, 1).map(|f| f.available), Some(false));
        });
    }

    #[test]
    fn test_failed_toggle_keeps_record() {
        Owner::new().with(|| {
            let store = loaded_store();
            assert!(store_begin_toggle(&store, 1));
            store_apply_toggled(&store, 1, Err(server_error()));
            assert!(!store_is_toggling(&store, 1));
            assert_eq!(store_food(&store, 1), Some(food(1, "a", true)));
            assert!(store_begin_toggle(&store, 1));
        });
    }
}
