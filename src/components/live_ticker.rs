//! Live status strip: last-updated clock, refresh countdown, price drift
//!
//! The countdown interval drives periodic catalog refreshes; a second,
//! slower interval nudges a random subset of prices so the board reads live
//! between refreshes.

use chrono::Local;
use gloo_timers::callback::Interval;
use leptos::prelude::*;

use dealdeck_core::catalog::Product;
use dealdeck_core::format::{clock_label, countdown_label};

use crate::api::LiveConfig;

/// Share of listings whose price moves on each drift tick.
const DRIFT_CHANCE: f64 = 0.3;

#[component]
pub fn LiveTicker(
    products: RwSignal<Vec<Product>>,
    on_refresh: Callback<()>,
) -> impl IntoView {
    let config = use_context::<LiveConfig>().unwrap_or_default();
    let refresh_secs = config.refresh_interval_secs.max(1);
    let drift_ms = config.drift_interval_secs.max(1) * 1_000;

    let (remaining, set_remaining) = signal(refresh_secs);
    let (updated_at, set_updated_at) = signal(clock_label(Local::now()));

    let countdown = Interval::new(1_000, move || {
        let left = remaining.get_untracked();
        if left <= 1 {
            set_remaining.set(refresh_secs);
            set_updated_at.set(clock_label(Local::now()));
            on_refresh.run(());
        } else {
            set_remaining.set(left - 1);
        }
    });

    let drift = Interval::new(drift_ms, move || {
        products.update(|list| {
            for product in list.iter_mut() {
                if js_sys::Math::random() < DRIFT_CHANCE {
                    product.apply_drift(js_sys::Math::random() > 0.5);
                }
            }
        });
    });

    let timers = StoredValue::new_local(Some((countdown, drift)));
    on_cleanup(move || timers.set_value(None));

    view! {
        <div class="live-ticker">
            <span class="live-dot"></span>
            <span class="live-label">"Live prices"</span>
            <span class="live-updated">
                {move || format!("Updated {}", updated_at.get())}
            </span>
            <span class="live-countdown">
                {move || format!("Next refresh in {}", countdown_label(remaining.get()))}
            </span>
        </div>
    }
}
