//! Loading Overlay Component
//!
//! Full-screen spinner that blocks the page while startup is pending.

use leptos::prelude::*;

#[component]
pub fn LoadingOverlay() -> impl IntoView {
    view! {
        <div class="overlay" role="status" aria-label="tail-spin-loading">
            <div class="tail-spin"></div>
        </div>
    }
}
