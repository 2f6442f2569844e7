//! Modal Component
//!
//! Overlay shared by the create and edit dialogs.

use leptos::prelude::*;

/// Overlay that renders its children while `is_open` is true.
///
/// Clicking the backdrop calls `set_is_open`, clicks inside the dialog do not.
#[component]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] set_is_open: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || is_open.get()>
            <div class="modal-backdrop" on:click=move |_| set_is_open.run(())>
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
