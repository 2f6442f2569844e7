//! UI Components
//!
//! Collaborators composed by the dashboard page.

mod header;
mod modal;
mod food_inputs;
mod modal_add_food;
mod modal_edit_food;
mod food_card;

pub use header::Header;
pub use modal::Modal;
pub use food_inputs::FoodInputs;
pub use modal_add_food::ModalAddFood;
pub use modal_edit_food::ModalEditFood;
pub use food_card::FoodCard;
