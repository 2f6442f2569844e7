//! Dashboard Actions
//!
//! Remote half of each dashboard operation. Every action returns the record
//! (or id) the caller reconciles into local state, or an `ApiError`.

use crate::api::{ApiError, ApiResult, FoodApi};
use crate::collection::FoodCollection;
use crate::models::{Food, FoodFields, NewFood};

/// Fetch the whole collection in server order
pub async fn load_foods<A: FoodApi + ?Sized>(api: &A) -> ApiResult<FoodCollection> {
    let foods = api.list_foods().await?;
    Ok(FoodCollection::from(foods))
}

/// Create a food from form fields; it is always created available.
/// Returns the server's record, id included.
pub async fn create_food<A: FoodApi + ?Sized>(api: &A, fields: FoodFields) -> ApiResult<Food> {
    api.create_food(&NewFood::from(fields)).await
}

/// Send the selected food merged with the submitted fields.
/// Returns the merged record that was sent.
pub async fn update_food<A: FoodApi + ?Sized>(
    api: &A,
    selected: Option<&Food>,
    fields: FoodFields,
) -> ApiResult<Food> {
    let selected = selected.ok_or(ApiError::NothingSelected)?;
    let merged = fields.into_food(selected.id, selected.available);
    api.update_food(&merged).await?;
    Ok(merged)
}

/// Flip a food's availability on the server
pub async fn toggle_available<A: FoodApi + ?Sized>(api: &A, food: &Food) -> ApiResult<Food> {
    let toggled = food.with_availability_toggled();
    api.update_food(&toggled).await?;
    Ok(toggled)
}

pub async fn delete_food<A: FoodApi + ?Sized>(api: &A, id: u32) -> ApiResult<u32> {
    api.delete_food(id).await?;
    Ok(id)
}
