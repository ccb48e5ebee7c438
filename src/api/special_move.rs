//! Special Move Endpoints
//!
//! `RankingApi` over HTTP.

use async_trait::async_trait;

use super::http::{form, get_json, post_form, post_form_json};
use super::RankingApi;
use crate::config::AppConfig;
use crate::error::Result;
use crate::models::SpecialMove;

/// Browser `fetch` implementation of the special move API
#[derive(Debug, Clone)]
pub struct HttpRankingApi {
    config: AppConfig,
}

impl HttpRankingApi {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl RankingApi for HttpRankingApi {
    async fn fetch_ranking(&self) -> Result<Vec<SpecialMove>> {
        get_json(&self.config.win_count_ranking_url()).await
    }

    async fn fetch_win_rate_ranking(&self) -> Result<Vec<SpecialMove>> {
        get_json(&self.config.win_rate_ranking_url()).await
    }

    async fn fetch_gallery(&self, id_token: &str) -> Result<Vec<SpecialMove>> {
        let body = form(&[("idToken", id_token)])?;
        post_form_json(&self.config.gallery_url(), &body).await
    }

    async fn register_favorite(&self, sp_id: u32, id_token: &str) -> Result<()> {
        let sp_id = sp_id.to_string();
        let body = form(&[("spId", sp_id.as_str()), ("idToken", id_token)])?;
        post_form(&self.config.register_favorite_url(), &body).await
    }
}
