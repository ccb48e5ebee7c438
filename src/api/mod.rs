//! Special Move API
//!
//! HTTP bindings to the remote ranking/gallery service.

mod http;
mod special_move;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::SpecialMove;

pub use special_move::HttpRankingApi;

/// Remote operations the ranking screen depends on
#[async_trait(?Send)]
pub trait RankingApi {
    /// Entries ordered by win count (server-side ordering)
    async fn fetch_ranking(&self) -> Result<Vec<SpecialMove>>;

    /// Entries ordered by win rate (server-side ordering)
    async fn fetch_win_rate_ranking(&self) -> Result<Vec<SpecialMove>>;

    /// Entries the token's owner has favorited
    async fn fetch_gallery(&self, id_token: &str) -> Result<Vec<SpecialMove>>;

    /// Add an entry to the token owner's gallery. Succeeds on any 2xx.
    async fn register_favorite(&self, sp_id: u32, id_token: &str) -> Result<()>;
}
