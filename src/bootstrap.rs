//! Identity Bootstrap
//!
//! Brings up the LIFF session and yields the ID token for API calls.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::storage::KeyValueStore;

/// Platform identity SDK
#[async_trait(?Send)]
pub trait IdentityProvider {
    async fn init(&self, app_id: &str) -> Result<()>;
    fn is_logged_in(&self) -> bool;
    /// Starts the redirect-based login flow
    fn login(&self);
    fn id_token(&self) -> Option<String>;
}

/// Outcome of a successful bootstrap
#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    Authenticated(String),
    /// Login redirect started; the page navigates away
    LoginRedirect,
}

/// Namespace the SDK persists its state under
pub fn store_prefix(app_id: &str) -> String {
    format!("LIFF_STORE:{}:", app_id)
}

#[derive(Deserialize)]
struct DecodedIdToken {
    /// Expiry, epoch seconds
    exp: f64,
}

/// Purge the SDK's cached state if its decoded ID token has expired.
///
/// Returns the number of keys removed. A missing or unreadable cache entry
/// removes nothing.
pub fn clear_expired_id_token(store: &dyn KeyValueStore, app_id: &str, now_ms: f64) -> Result<usize> {
    let prefix = store_prefix(app_id);
    let Some(cached) = store.get(&format!("{}decodedIDToken", prefix))? else {
        return Ok(0);
    };

    let decoded: DecodedIdToken = match serde_json::from_str(&cached) {
        Ok(decoded) => decoded,
        Err(e) => {
            log::warn!("[Bootstrap] Unreadable cached ID token: {}", e);
            return Ok(0);
        }
    };

    if now_ms <= decoded.exp * 1000.0 {
        return Ok(0);
    }

    let stale: Vec<String> = store
        .keys()?
        .into_iter()
        .filter(|key| key.starts_with(&prefix))
        .collect();
    for key in &stale {
        store.remove(key)?;
    }
    log::info!("[Bootstrap] Cleared {} expired LIFF entries", stale.len());
    Ok(stale.len())
}

/// Purge an expired token cache, init the SDK, then log in or read the token
pub async fn bootstrap(
    identity: &dyn IdentityProvider,
    store: &dyn KeyValueStore,
    app_id: &str,
    now_ms: f64,
) -> Result<Session> {
    if let Err(e) = clear_expired_id_token(store, app_id, now_ms) {
        log::warn!("[Bootstrap] Token cache purge skipped: {}", e);
    }

    identity.init(app_id).await?;

    if !identity.is_logged_in() {
        log::info!("[Bootstrap] Not logged in, redirecting to login");
        identity.login();
        return Ok(Session::LoginRedirect);
    }

    identity
        .id_token()
        .map(Session::Authenticated)
        .ok_or(AppError::MissingToken)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeIdentity, MemoryStorage};
    use futures::executor::block_on;

    const APP_ID: &str = "app-1";
    const NOW_MS: f64 = 1_700_000_000_000.0;

    fn seeded_store(exp_secs: f64) -> MemoryStorage {
        let store = MemoryStorage::default();
        store.insert(
            "LIFF_STORE:app-1:decodedIDToken",
            &format!(r#"{{"exp": {}, "sub": "U1"}}"#, exp_secs),
        );
        store.insert("LIFF_STORE:app-1:accessToken", "abc");
        store.insert("LIFF_STORE:other-app:accessToken", "keep");
        store.insert("unrelated", "keep");
        store
    }

    #[test]
    fn test_expired_cache_is_purged() {
        let store = seeded_store(NOW_MS / 1000.0 - 60.0);

        let removed = clear_expired_id_token(&store, APP_ID, NOW_MS).unwrap();

        assert_eq!(removed, 2);
        assert_eq!(
            store.keys().unwrap(),
            vec!["LIFF_STORE:other-app:accessToken".to_string(), "unrelated".to_string()]
        );
    }

    #[test]
    fn test_fresh_cache_is_kept() {
        let store = seeded_store(NOW_MS / 1000.0 + 60.0);

        assert_eq!(clear_expired_id_token(&store, APP_ID, NOW_MS).unwrap(), 0);
        assert_eq!(store.keys().unwrap().len(), 4);
    }

    #[test]
    fn test_missing_cache_is_noop() {
        let store = MemoryStorage::default();
        store.insert("LIFF_STORE:app-1:accessToken", "abc");

        assert_eq!(clear_expired_id_token(&store, APP_ID, NOW_MS).unwrap(), 0);
        assert_eq!(store.keys().unwrap().len(), 1);
    }

    #[test]
    fn test_unreadable_cache_is_left_alone() {
        let store = MemoryStorage::default();
        store.insert("LIFF_STORE:app-1:decodedIDToken", "not json");

        assert_eq!(clear_expired_id_token(&store, APP_ID, NOW_MS).unwrap(), 0);
        assert_eq!(store.keys().unwrap().len(), 1);
    }

    #[test]
    fn test_logged_in_yields_token() {
        let identity = FakeIdentity::logged_in("token-abc");
        let store = MemoryStorage::default();

        let session = block_on(bootstrap(&identity, &store, APP_ID, NOW_MS)).unwrap();

        assert_eq!(session, Session::Authenticated("token-abc".to_string()));
        assert_eq!(identity.init_calls(), vec![APP_ID.to_string()]);
        assert!(!identity.login_called());
    }

    #[test]
    fn test_logged_out_triggers_login() {
        let identity = FakeIdentity::logged_out();
        let store = MemoryStorage::default();

        let session = block_on(bootstrap(&identity, &store, APP_ID, NOW_MS)).unwrap();

        assert_eq!(session, Session::LoginRedirect);
        assert!(identity.login_called());
    }

    #[test]
    fn test_purge_runs_before_init() {
        let identity = FakeIdentity::logged_in("token-abc");
        let store = seeded_store(NOW_MS / 1000.0 - 1.0);

        block_on(bootstrap(&identity, &store, APP_ID, NOW_MS)).unwrap();

        assert!(store.get("LIFF_STORE:app-1:decodedIDToken").unwrap().is_none());
        assert_eq!(identity.init_calls().len(), 1);
    }

    #[test]
    fn test_init_failure_propagates() {
        let identity = FakeIdentity::failing_init("boom");
        let store = MemoryStorage::default();

        let err = block_on(bootstrap(&identity, &store, APP_ID, NOW_MS)).unwrap_err();

        assert_eq!(err, AppError::Sdk("boom".to_string()));
        assert!(!identity.login_called());
    }

    #[test]
    fn test_logged_in_without_token_is_error() {
        let identity = FakeIdentity::logged_in_without_token();
        let store = MemoryStorage::default();

        let err = block_on(bootstrap(&identity, &store, APP_ID, NOW_MS)).unwrap_err();

        assert_eq!(err, AppError::MissingToken);
    }
}
