//! Special Move Ranking App
//!
//! Root view: bootstraps LIFF, fetches the rankings and renders the selected leaderboard.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::RankingApi;
use crate::bootstrap::IdentityProvider;
use crate::components::{LoadingOverlay, RankingList, RankingTabs, SharedApi};
use crate::config::AppConfig;
use crate::ranking::RankingTab;
use crate::storage::KeyValueStore;
use crate::store::{startup, RankingState, RankingStateStoreFields, RankingStore, Startup};

#[component]
pub fn App(
    config: AppConfig,
    identity: Rc<dyn IdentityProvider>,
    storage: Rc<dyn KeyValueStore>,
    api: Rc<dyn RankingApi>,
) -> impl IntoView {
    // State
    let state: RankingStore = Store::new(RankingState::new());
    let identity = StoredValue::new_local(identity);
    let storage = StoredValue::new_local(storage);
    let api: SharedApi = StoredValue::new_local(api);

    // Bootstrap and fetch once on mount
    Effect::new(move |_| {
        let identity = identity.get_value();
        let storage = storage.get_value();
        let ranking_api = api.get_value();
        let liff_id = config.liff_id.clone();
        spawn_local(async move {
            let outcome = startup(
                identity.as_ref(),
                storage.as_ref(),
                ranking_api.as_ref(),
                &liff_id,
                js_sys::Date::now(),
            )
            .await;
            if let Startup::Ready { rankings: Ok(snapshot), .. } = &outcome {
                log::info!(
                    "[APP] Loaded {} / {} entries, {} favorited",
                    snapshot.by_win_count.len(),
                    snapshot.by_win_rate.len(),
                    snapshot.gallery.len()
                );
            }
            state.update(|s| s.apply_startup(outcome));
        });
    });

    let loading = move || state.loading().get();
    let current_tab = Signal::derive(move || state.tab().get());
    let active_list = Signal::derive(move || state.with(|s| s.active_list().to_vec()));
    let gallery = Signal::derive(move || state.gallery().get());
    let id_token = Signal::derive(move || state.id_token().get());

    view! {
        <div class="app-layout">
            <Show when=loading>
                <LoadingOverlay />
            </Show>

            <RankingTabs
                current=current_tab
                on_select=Callback::new(move |tab: RankingTab| state.update(|s| s.select_tab(tab)))
            />

            <Show when=move || !loading()>
                <RankingList
                    entries=active_list
                    gallery=gallery
                    id_token=id_token
                    api=api
                />
            </Show>
        </div>
    }
}
