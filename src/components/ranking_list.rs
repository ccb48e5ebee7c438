//! Ranking List Component
//!
//! Renders one leaderboard as ranked cards.

use leptos::prelude::*;

use super::{SharedApi, SpecialMoveCard};
use crate::models::{Gallery, SpecialMove};
use crate::ranking::{rank_label, Medal};

#[component]
pub fn RankingList(
    #[prop(into)] entries: Signal<Vec<SpecialMove>>,
    #[prop(into)] gallery: Signal<Gallery>,
    #[prop(into)] id_token: Signal<String>,
    api: SharedApi,
) -> impl IntoView {
    view! {
        <div class="ranking-list">
            <For
                each=move || entries.get().into_iter().enumerate()
                key=|(index, entry)| (*index, entry.id)
                children=move |(index, entry)| {
                    // Medal follows list position, not score
                    let medal = Medal::for_index(index);
                    let medal_style = medal
                        .map(|m| format!("color: {};", m.color()))
                        .unwrap_or_default();

                    view! {
                        <div class="ranking-entry">
                            <div class="ranking-entry-header">
                                <span class="rank-medal" style=medal_style>
                                    {medal.map(|_| "🏆")}
                                </span>
                                <span class="rank-label">{rank_label(index)}</span>
                            </div>
                            <SpecialMoveCard entry=entry gallery=gallery id_token=id_token api=api />
                        </div>
                    }
                }
            />
        </div>
    }
}
