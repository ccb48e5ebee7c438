//! Favorite Button Component
//!
//! Heart toggle in the corner of a card.

use leptos::prelude::*;

use crate::favorite::FavoriteState;

/// Heart button reflecting a card's favorite state
///
/// Disabled once favorited (and while a registration is in flight).
#[component]
pub fn FavoriteButton(
    #[prop(into)] state: Signal<FavoriteState>,
    #[prop(into)] on_click: Callback<()>,
) -> impl IntoView {
    let favorited = move || state.get().is_favorited();

    view! {
        <button
            class=move || if favorited() { "favorite-btn favorited" } else { "favorite-btn" }
            disabled=move || state.get().is_disabled()
            aria-pressed=move || favorited().to_string()
            title="お気に入り"
            on:click=move |ev| {
                ev.stop_propagation();
                on_click.run(());
            }
        >
            {move || if favorited() { "♥" } else { "♡" }}
        </button>
    }
}
