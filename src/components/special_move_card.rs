//! Special Move Card Component
//!
//! Summary card with favorite toggle and detail overlay.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{DetailOverlay, FavoriteButton, SharedApi};
use crate::favorite::{self, FavoriteState};
use crate::models::{Gallery, SpecialMove};

/// One entry in a leaderboard
///
/// The favorite state is seeded from `gallery` once and then owned by the card.
#[component]
pub fn SpecialMoveCard(
    entry: SpecialMove,
    #[prop(into)] gallery: Signal<Gallery>,
    #[prop(into)] id_token: Signal<String>,
    api: SharedApi,
) -> impl IntoView {
    let sp_id = entry.id;
    let (favorite_state, set_favorite_state) =
        signal(gallery.with_untracked(|g| FavoriteState::initial(g, sp_id)));
    let (detail_open, set_detail_open) = signal(false);

    let on_favorite = Callback::new(move |_: ()| {
        let current = favorite_state.get_untracked();
        if current.is_disabled() {
            return;
        }
        let api = api.get_value();
        let token = id_token.get_untracked();
        spawn_local(async move {
            favorite::activate(api.as_ref(), current, sp_id, &token, move |state| {
                set_favorite_state.set(state)
            })
            .await;
        });
    });

    let image = entry.image_name.clone();
    let name = entry.sp_name.clone();
    let furigana = entry.furigana.clone();
    let heading = entry.heading.clone();

    view! {
        <div class="sp-card-wrapper">
            <div class="sp-card">
                <div class="sp-card-body">
                    <img class="sp-card-image" src=image alt=name.clone() />
                    <FavoriteButton state=favorite_state on_click=on_favorite />
                    <div class="sp-card-content">
                        <span class="sp-card-furigana">{furigana}</span>
                        <h2 class="sp-card-name">{name}</h2>
                        <button class="sp-card-detail-btn" on:click=move |_| set_detail_open.set(true)>
                            "詳細"
                        </button>
                    </div>
                </div>
                <p class="sp-card-heading">{heading}</p>
            </div>
            <DetailOverlay
                entry=entry
                open=detail_open
                on_close=Callback::new(move |_: ()| set_detail_open.set(false))
            />
        </div>
    }
}
