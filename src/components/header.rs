//! Header Component
//!
//! Top bar with the app title and the "new food" trigger.

use leptos::prelude::*;

#[component]
pub fn Header(#[prop(into)] open_modal: Callback<()>) -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-content">
                <span class="header-title">"Food Dashboard"</span>
                <nav>
                    <button
                        type="button"
                        class="new-food-btn"
                        on:click=move |_| open_modal.run(())
                    >
                        <span class="text">"New food"</span>
                        <span class="icon">"+"</span>
                    </button>
                </nav>
            </div>
        </header>
    }
}
