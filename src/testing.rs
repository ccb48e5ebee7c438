//! Test Doubles
//!
//! In-memory fakes for the SDK, storage and API seams.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::api::RankingApi;
use crate::bootstrap::IdentityProvider;
use crate::error::{AppError, Result};
use crate::models::SpecialMove;
use crate::storage::KeyValueStore;

pub fn make_move(id: u32, battle_count: u32, win_count: u32) -> SpecialMove {
    SpecialMove {
        id,
        user_id: format!("U{}", id),
        sp_name: format!("Move {}", id),
        battle_count,
        win_count,
        lose_count: battle_count.saturating_sub(win_count),
        ..Default::default()
    }
}

// ========================
// Storage
// ========================

#[derive(Default)]
pub struct MemoryStorage {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn insert(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.entries.borrow().keys().cloned().collect())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

// ========================
// Identity
// ========================

pub struct FakeIdentity {
    logged_in: bool,
    token: Option<String>,
    init_error: Option<String>,
    init_calls: RefCell<Vec<String>>,
    login_called: Cell<bool>,
}

impl FakeIdentity {
    fn build(logged_in: bool, token: Option<&str>, init_error: Option<&str>) -> Self {
        Self {
            logged_in,
            token: token.map(str::to_string),
            init_error: init_error.map(str::to_string),
            init_calls: RefCell::new(Vec::new()),
            login_called: Cell::new(false),
        }
    }

    pub fn logged_in(token: &str) -> Self {
        Self::build(true, Some(token), None)
    }

    pub fn logged_in_without_token() -> Self {
        Self::build(true, None, None)
    }

    pub fn logged_out() -> Self {
        Self::build(false, None, None)
    }

    pub fn failing_init(message: &str) -> Self {
        Self::build(true, Some("unused"), Some(message))
    }

    pub fn init_calls(&self) -> Vec<String> {
        self.init_calls.borrow().clone()
    }

    pub fn login_called(&self) -> bool {
        self.login_called.get()
    }
}

#[async_trait(?Send)]
impl IdentityProvider for FakeIdentity {
    async fn init(&self, app_id: &str) -> Result<()> {
        self.init_calls.borrow_mut().push(app_id.to_string());
        match &self.init_error {
            Some(message) => Err(AppError::Sdk(message.clone())),
            None => Ok(()),
        }
    }

    fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    fn login(&self) {
        self.login_called.set(true);
    }

    fn id_token(&self) -> Option<String> {
        self.token.clone()
    }
}

// ========================
// Ranking API
// ========================

pub struct FakeRankingApi {
    win_count: RefCell<Result<Vec<SpecialMove>>>,
    win_rate: RefCell<Result<Vec<SpecialMove>>>,
    gallery: RefCell<Result<Vec<SpecialMove>>>,
    register_result: RefCell<Result<()>>,
    gallery_gate: RefCell<Option<oneshot::Receiver<()>>>,
    calls: RefCell<Vec<&'static str>>,
    gallery_tokens: RefCell<Vec<String>>,
    registrations: RefCell<Vec<(u32, String)>>,
}

impl FakeRankingApi {
    pub fn new(win_count: Vec<SpecialMove>, win_rate: Vec<SpecialMove>, gallery: Vec<SpecialMove>) -> Self {
        Self {
            win_count: RefCell::new(Ok(win_count)),
            win_rate: RefCell::new(Ok(win_rate)),
            gallery: RefCell::new(Ok(gallery)),
            register_result: RefCell::new(Ok(())),
            gallery_gate: RefCell::new(None),
            calls: RefCell::new(Vec::new()),
            gallery_tokens: RefCell::new(Vec::new()),
            registrations: RefCell::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new())
    }

    pub fn fail_win_rate(&self, err: AppError) {
        *self.win_rate.borrow_mut() = Err(err);
    }

    pub fn fail_gallery(&self, err: AppError) {
        *self.gallery.borrow_mut() = Err(err);
    }

    pub fn set_register_result(&self, result: Result<()>) {
        *self.register_result.borrow_mut() = result;
    }

    /// Hold the gallery request open until the returned sender fires (or is dropped)
    pub fn gate_gallery(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.gallery_gate.borrow_mut() = Some(rx);
        tx
    }

    /// Names of the fetch endpoints called, in call order
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    pub fn gallery_tokens(&self) -> Vec<String> {
        self.gallery_tokens.borrow().clone()
    }

    pub fn registrations(&self) -> Vec<(u32, String)> {
        self.registrations.borrow().clone()
    }
}

#[async_trait(?Send)]
impl RankingApi for FakeRankingApi {
    async fn fetch_ranking(&self) -> Result<Vec<SpecialMove>> {
        self.calls.borrow_mut().push("ranking");
        self.win_count.borrow().clone()
    }

    async fn fetch_win_rate_ranking(&self) -> Result<Vec<SpecialMove>> {
        self.calls.borrow_mut().push("ranking-winrate");
        self.win_rate.borrow().clone()
    }

    async fn fetch_gallery(&self, id_token: &str) -> Result<Vec<SpecialMove>> {
        self.calls.borrow_mut().push("gallery");
        self.gallery_tokens.borrow_mut().push(id_token.to_string());
        let gate = self.gallery_gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.gallery.borrow().clone()
    }

    async fn register_favorite(&self, sp_id: u32, id_token: &str) -> Result<()> {
        self.registrations.borrow_mut().push((sp_id, id_token.to_string()));
        self.register_result.borrow().clone()
    }
}
