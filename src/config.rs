//! App Configuration
//!
//! The LIFF app id and API base URL the mini-app is deployed with.

const LIFF_ID: &str = "2001116233-NqaYzJ5R";
const API_BASE: &str = "https://original-specialmove.onrender.com";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// LIFF application id passed to `liff.init`
    pub liff_id: String,
    /// Base URL of the special move API, without trailing slash
    pub api_base: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            liff_id: LIFF_ID.to_string(),
            api_base: API_BASE.to_string(),
        }
    }
}

impl AppConfig {
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    pub fn win_count_ranking_url(&self) -> String {
        self.endpoint("get-specialmove-ranking")
    }

    pub fn win_rate_ranking_url(&self) -> String {
        self.endpoint("get-specialmove-ranking-winrate")
    }

    pub fn gallery_url(&self) -> String {
        self.endpoint("get-specialmove")
    }

    pub fn register_favorite_url(&self) -> String {
        self.endpoint("regist-gallary")
    }
}
