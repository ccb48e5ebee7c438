//! UI Components
//!
//! Leptos components for the ranking screen.

mod detail_overlay;
mod favorite_button;
mod loading_overlay;
mod ranking_list;
mod ranking_tabs;
mod special_move_card;

use std::rc::Rc;

use leptos::prelude::*;

use crate::api::RankingApi;

pub use detail_overlay::DetailOverlay;
pub use favorite_button::FavoriteButton;
pub use loading_overlay::LoadingOverlay;
pub use ranking_list::RankingList;
pub use ranking_tabs::RankingTabs;
pub use special_move_card::SpecialMoveCard;

/// API handle shared by the root view and every card
pub type SharedApi = StoredValue<Rc<dyn RankingApi>, LocalStorage>;
