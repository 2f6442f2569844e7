//! HTTP Food API Client
//!
//! `reqwest` client for the food service. In the browser it runs on top of `fetch`.

use async_trait::async_trait;
use reqwest::{Client, Response};

use super::{ApiError, ApiResult, FoodApi};
use crate::config::ApiConfig;
use crate::models::{Food, NewFood};

const FOODS: &str = "foods";

#[derive(Debug, Clone)]
pub struct HttpFoodApi {
    client: Client,
    config: ApiConfig,
}

impl HttpFoodApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        self.config.endpoint(endpoint)
    }

    fn food_url(&self, id: u32) -> String {
        self.build_url(&format!("{}/{}", FOODS, id))
    }

    async fn handle_response_status(response: Response) -> ApiResult<Response> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }
}

#[async_trait(?Send)]
impl FoodApi for HttpFoodApi {
    async fn list_foods(&self) -> ApiResult<Vec<Food>> {
        let response = self.client.get(self.build_url(FOODS)).send().await?;
        let response = Self::handle_response_status(response).await?;
        Ok(response.json().await?)
    }

    async fn create_food(&self, food: &NewFood) -> ApiResult<Food> {
        let response = self
            .client
            .post(self.build_url(FOODS))
            .json(food)
            .send()
            .await?;
        let response = Self::handle_response_status(response).await?;
        Ok(response.json().await?)
    }

    async fn update_food(&self, food: &Food) -> ApiResult<()> {
        let response = self
            .client
            .put(self.food_url(food.id))
            .json(food)
            .send()
            .await?;
        // The echoed record is not needed, the caller already holds it
        Self::handle_response_status(response).await?;
        Ok(())
    }

    async fn delete_food(&self, id: u32) -> ApiResult<()> {
        let response = self.client.delete(self.food_url(id)).send().await?;
        Self::handle_response_status(response).await?;
        Ok(())
    }
}
