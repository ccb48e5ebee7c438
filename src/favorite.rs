//! Favorite Toggle
//!
//! One-way favorite registration for a single card.

use crate::api::RankingApi;
use crate::models::Gallery;

/// Favorite control state for one card.
///
/// Only moves forward: `NotFavorited -> Registering -> Favorited`.
/// A failed registration falls back to `NotFavorited` so the user can retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteState {
    NotFavorited,
    /// Registration request in flight
    Registering,
    Favorited,
}

impl FavoriteState {
    pub fn initial(gallery: &Gallery, sp_id: u32) -> Self {
        if gallery.contains(sp_id) {
            FavoriteState::Favorited
        } else {
            FavoriteState::NotFavorited
        }
    }

    pub fn is_favorited(self) -> bool {
        self == FavoriteState::Favorited
    }

    /// The button ignores clicks in this state
    pub fn is_disabled(self) -> bool {
        self != FavoriteState::NotFavorited
    }
}

/// Handle a click on the favorite button.
///
/// Issues one registration request when the entry is not yet favorited and
/// reports each state change through `on_change`. Returns the settled state.
pub async fn activate(
    api: &dyn RankingApi,
    current: FavoriteState,
    sp_id: u32,
    id_token: &str,
    mut on_change: impl FnMut(FavoriteState),
) -> FavoriteState {
    if current.is_disabled() {
        return current;
    }
    on_change(FavoriteState::Registering);

    let next = match api.register_favorite(sp_id, id_token).await {
        Ok(()) => FavoriteState::Favorited,
        Err(e) => {
            log::error!("[Card] gallery registration failed for {}: {}", sp_id, e);
            FavoriteState::NotFavorited
        }
    };
    on_change(next);
    next
}
