//! Ranking Tab Bar Component
//!
//! Switches between the win-count and win-rate leaderboards.

use leptos::prelude::*;

use crate::ranking::RankingTab;

/// Ranking Tab Bar component
#[component]
pub fn RankingTabs(
    #[prop(into)] current: Signal<RankingTab>,
    #[prop(into)] on_select: Callback<RankingTab>,
) -> impl IntoView {
    view! {
        <div class="ranking-tab-bar" role="tablist">
            {RankingTab::ALL
                .into_iter()
                .map(|tab| {
                    let is_active = move || current.get() == tab;
                    let tab_class = move || {
                        if is_active() { "ranking-tab active" } else { "ranking-tab" }
                    };

                    view! {
                        <button
                            class=tab_class
                            role="tab"
                            aria-selected=move || is_active().to_string()
                            on:click=move |_| on_select.run(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
