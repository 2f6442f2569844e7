//! Application Context
//!
//! Shared API client provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpFoodApi;
use crate::config::ApiConfig;

/// Food API handle provided to all components
#[derive(Clone, Copy)]
pub struct ApiContext {
    // Browser-only client, kept in local storage of the reactive arena
    api: StoredValue<HttpFoodApi, LocalStorage>,
}

impl ApiContext {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            api: StoredValue::new_local(HttpFoodApi::new(config)),
        }
    }

    /// Clone of the client, for use inside a spawned future
    pub fn api(&self) -> HttpFoodApi {
        self.api.get_value()
    }
}

pub fn use_api() -> ApiContext {
    expect_context::<ApiContext>()
}
