//! Rankings
//!
//! Concurrent ranking/gallery fetch plus the tab and medal helpers used to render it.

use crate::api::RankingApi;
use crate::error::Result;
use crate::models::{Gallery, SpecialMove};

/// Everything the ranking screen shows, fetched in one go
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RankingSnapshot {
    pub by_win_count: Vec<SpecialMove>,
    pub by_win_rate: Vec<SpecialMove>,
    pub gallery: Gallery,
}

/// Fetch both rankings and the caller's gallery concurrently.
///
/// Resolves once all three requests succeed; the first failure fails the whole fetch.
pub async fn fetch_rankings(api: &dyn RankingApi, id_token: &str) -> Result<RankingSnapshot> {
    let (by_win_count, by_win_rate, gallery) = futures::try_join!(
        api.fetch_ranking(),
        api.fetch_win_rate_ranking(),
        api.fetch_gallery(id_token)
    )?;

    Ok(RankingSnapshot {
        by_win_count,
        by_win_rate,
        gallery: Gallery::from_entries(&gallery),
    })
}

/// Which leaderboard is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankingTab {
    #[default]
    WinCount,
    WinRate,
}

impl RankingTab {
    pub const ALL: [RankingTab; 2] = [RankingTab::WinCount, RankingTab::WinRate];

    pub fn label(self) -> &'static str {
        match self {
            RankingTab::WinCount => "勝数ランキング",
            RankingTab::WinRate => "勝率ランキング",
        }
    }
}

/// Trophy shown next to the top three positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Medal for a zero-based list position. Purely positional, ties are not considered.
    pub fn for_index(index: usize) -> Option<Medal> {
        match index {
            0 => Some(Medal::Gold),
            1 => Some(Medal::Silver),
            2 => Some(Medal::Bronze),
            _ => None,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Medal::Gold => "#ffd700",
            Medal::Silver => "#c0c0c0",
            Medal::Bronze => "#cd7f32",
        }
    }
}

/// Position label, e.g. `1位` for index 0
pub fn rank_label(index: usize) -> String {
    format!("{}位", index + 1)
}
