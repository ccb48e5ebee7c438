//! Detail Overlay Component
//!
//! Full-screen view of one special move with its battle record.

use leptos::prelude::*;

use crate::models::SpecialMove;

#[component]
pub fn DetailOverlay(
    entry: SpecialMove,
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let record = entry.record_label();
    let win_rate = format!("勝率: {}", entry.win_rate_label());

    view! {
        <Show when=move || open.get()>
            <div class="detail-overlay" on:click=move |_| on_close.run(())>
                <div class="detail-panel" on:click=|e| e.stop_propagation()>
                    <button class="detail-close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                    <div class="detail-body">
                        <img class="detail-image" src=entry.image_name.clone() alt=entry.sp_name.clone() />
                        <span class="detail-furigana">{entry.furigana.clone()}</span>
                        <h2 class="detail-name">{entry.sp_name.clone()}</h2>
                        <p class="detail-heading">{entry.heading.clone()}</p>
                        // pre-line keeps the author's line breaks
                        <p class="detail-description">{entry.description.clone()}</p>
                        <p class="detail-record">{record.clone()}</p>
                        <p class="detail-win-rate">{win_rate.clone()}</p>
                    </div>
                </div>
            </div>
        </Show>
    }
}
