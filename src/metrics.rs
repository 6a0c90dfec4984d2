use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use gloo_timers::callback::Interval;

#[cfg(target_arch = "wasm32")]
const REFRESH_MS: u32 = 5_000;

/// Simulated live-metrics overlay. The numbers wander on a five second
/// interval; the interval handle lives in a signal so it is cancelled when
/// the component goes away.
#[component]
pub fn LiveMetrics() -> Element {
    let visitors = use_signal(|| 1_247u32);
    let response_ms = use_signal(|| 28u32);
    #[cfg(target_arch = "wasm32")]
    {
        let mut ticker = use_signal(|| None::<Interval>);
        use_effect(move || {
            if ticker.read().is_some() {
                return;
            }
            let mut visitors = visitors;
            let mut response_ms = response_ms;
            ticker.set(Some(Interval::new(REFRESH_MS, move || {
                let next_visitors = visitors.peek().wrapping_add(random_below(3));
                visitors.set(next_visitors);
                response_ms.set(20 + random_below(20));
            })));
        });
    }

    rsx! {
        div { class: "live-metrics",
            p { class: "live-metrics-title", "⚡ Live Metrics" }
            p { "👥 Visitors: {visitors}" }
            p { "⚡ Response: {response_ms}ms" }
            p { "🟢 Uptime: 99.9%" }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn random_below(bound: u32) -> u32 {
    (js_sys::Math::random() * f64::from(bound)) as u32
}
