//! Food API
//!
//! REST bindings to the food service, organized like the backend routes:
//! GET/POST `/foods`, PUT/DELETE `/foods/{id}`.

mod client;
mod error;

use async_trait::async_trait;

use crate::models::{Food, NewFood};

pub use client::HttpFoodApi;
pub use error::{ApiError, ApiResult};

/// Remote food storage.
///
/// Browser futures are not `Send`, so neither is this trait.
#[async_trait(?Send)]
pub trait FoodApi {
    /// Fetch every food, in server order
    async fn list_foods(&self) -> ApiResult<Vec<Food>>;

    /// Create a food and return the stored record with its assigned id
    async fn create_food(&self, food: &NewFood) -> ApiResult<Food>;

    /// Overwrite the food addressed by `food.id` with the full record
    async fn update_food(&self, food: &Food) -> ApiResult<()>;

    /// Delete the food with this id
    async fn delete_food(&self, id: u32) -> ApiResult<()>;
}
