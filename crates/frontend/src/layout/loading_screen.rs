//! Cosmetic startup screen: a progress bar ticking from 0 to 100 with four
//! staged captions, then a short grace delay before handing over to the app.

use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const TICK_MS: u32 = 50;
const TICK_STEP: u32 = 2;
const COMPLETE_DELAY_MS: u32 = 300;

/// Staged captions shown as the bar fills, with their icons.
const STAGES: [(&str, &str); 4] = [
    ("graduation-cap", "Initializing PISES System"),
    ("book-open", "Loading Academic Resources"),
    ("users", "Connecting Student Portal"),
    ("award", "Ready to Learn!"),
];

/// Maps a 0..=100 progress value onto a stage index.
fn stage_for_progress(progress: u32) -> usize {
    ((progress / 25) as usize).min(STAGES.len() - 1)
}

#[component]
pub fn LoadingScreen(#[prop(into)] on_complete: Callback<()>) -> impl IntoView {
    let progress = RwSignal::new(0u32);

    // The ticker must stop as soon as the component unmounts.
    let cancelled = StoredValue::new(false);
    on_cleanup(move || cancelled.set_value(true));

    spawn_local(async move {
        loop {
            TimeoutFuture::new(TICK_MS).await;
            if cancelled.try_get_value().unwrap_or(true) {
                break;
            }
            let done = progress
                .try_update(|value| {
                    *value = (*value + TICK_STEP).min(100);
                    *value >= 100
                })
                .unwrap_or(true);
            if done {
                TimeoutFuture::new(COMPLETE_DELAY_MS).await;
                on_complete.run(());
                break;
            }
        }
    });

    let stage = move || stage_for_progress(progress.get());
    let stage_icon = move || icon(STAGES[stage()].0);
    let stage_text = move || STAGES[stage()].1;

    view! {
        <div class="loading-screen">
            <div class="loading-screen__content">
                <div class="loading-screen__logo">{stage_icon}</div>

                <div class="loading-screen__name">
                    <h1>"PISES"</h1>
                    <p>"Pakistan International School"</p>
                    <p class="loading-screen__section">"English Section"</p>
                </div>

                <div class="loading-screen__stage">
                    <p>{stage_text}</p>
                    <div class="loading-screen__bar">
                        <div
                            class="loading-screen__bar-fill"
                            style:width=move || format!("{}%", progress.get())
                        ></div>
                    </div>
                    <div class="loading-screen__bar-labels">
                        <span>"0%"</span>
                        <span>{move || format!("{}%", progress.get())}</span>
                        <span>"100%"</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_boundaries() {
        assert_eq!(stage_for_progress(0), 0);
        assert_eq!(stage_for_progress(24), 0);
        assert_eq!(stage_for_progress(25), 1);
        assert_eq!(stage_for_progress(50), 2);
        assert_eq!(stage_for_progress(75), 3);
        // The last stage caps, even at and past 100.
        assert_eq!(stage_for_progress(100), 3);
    }
}
