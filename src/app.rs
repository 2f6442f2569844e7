//! Food Dashboard App
//!
//! Root component: provides the store and API client, then renders the dashboard.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::ApiConfig;
use crate::context::ApiContext;
use crate::dashboard::Dashboard;
use crate::store::DashboardState;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_env();
    log::info!("[APP] Using food API at {}", config.base_url);

    provide_context(Store::new(DashboardState::default()));
    provide_context(ApiContext::new(config));

    view! {
        <main class="app-layout">
            <Dashboard />
        </main>
    }
}
