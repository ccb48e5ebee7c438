//! Ranking Screen State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use reactive_stores::Store;

use crate::api::RankingApi;
use crate::bootstrap::{bootstrap, IdentityProvider, Session};
use crate::error::{AppError, Result};
use crate::models::{Gallery, SpecialMove};
use crate::ranking::{fetch_rankings, RankingSnapshot, RankingTab};
use crate::storage::KeyValueStore;

/// Root view state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct RankingState {
    /// Blocking spinner shown until startup settles
    pub loading: bool,
    /// LIFF ID token forwarded to the API
    pub id_token: String,
    /// Selected leaderboard
    pub tab: RankingTab,
    pub by_win_count: Vec<SpecialMove>,
    pub by_win_rate: Vec<SpecialMove>,
    /// Entries already favorited by the user
    pub gallery: Gallery,
}

impl RankingState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }

    /// The list for the selected tab
    pub fn active_list(&self) -> &[SpecialMove] {
        match self.tab {
            RankingTab::WinCount => &self.by_win_count,
            RankingTab::WinRate => &self.by_win_rate,
        }
    }

    /// Switch leaderboards. Shows the already-fetched list, nothing is refetched.
    pub fn select_tab(&mut self, tab: RankingTab) {
        self.tab = tab;
    }

    /// Fold the startup outcome into the state.
    ///
    /// Loading clears for every outcome except a pending login redirect.
    /// Failures leave the lists empty.
    pub fn apply_startup(&mut self, startup: Startup) {
        match startup {
            Startup::Redirecting => return,
            Startup::Ready { id_token, rankings } => {
                self.id_token = id_token;
                match rankings {
                    Ok(snapshot) => {
                        self.by_win_count = snapshot.by_win_count;
                        self.by_win_rate = snapshot.by_win_rate;
                        self.gallery = snapshot.gallery;
                    }
                    Err(e) => log::error!("[APP] special move fetch failed: {}", e),
                }
            }
            Startup::Failed(e) => log::error!("[APP] LIFF bootstrap failed: {}", e),
        }
        self.loading = false;
    }
}

/// Result of the mount-time startup sequence
#[derive(Debug)]
pub enum Startup {
    /// Login redirect started
    Redirecting,
    /// Token obtained; rankings fetched or failed
    Ready {
        id_token: String,
        rankings: Result<RankingSnapshot>,
    },
    /// No token could be obtained
    Failed(AppError),
}

/// Bootstrap the identity, then fetch rankings with the token
pub async fn startup(
    identity: &dyn IdentityProvider,
    storage: &dyn KeyValueStore,
    api: &dyn RankingApi,
    app_id: &str,
    now_ms: f64,
) -> Startup {
    match bootstrap(identity, storage, app_id, now_ms).await {
        Ok(Session::LoginRedirect) => Startup::Redirecting,
        Ok(Session::Authenticated(id_token)) => {
            let rankings = fetch_rankings(api, &id_token).await;
            Startup::Ready { id_token, rankings }
        }
        Err(e) => Startup::Failed(e),
    }
}

/// Type alias for the store
pub type RankingStore = Store<RankingState>;
