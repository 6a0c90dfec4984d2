use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use gloo_timers::callback::Timeout;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "KeyB",
    "KeyA",
];

#[cfg(target_arch = "wasm32")]
const SECRET_WINDOW_MS: u32 = 10_000;

/// Rolling buffer of the last ten key codes, matched verbatim against the
/// Konami sequence on every push.
#[derive(Debug, Default)]
pub struct KonamiTracker {
    buffer: Vec<String>,
}

impl KonamiTracker {
    pub fn push(&mut self, code: &str) -> bool {
        if self.buffer.len() == KONAMI_SEQUENCE.len() {
            self.buffer.remove(0);
        }
        self.buffer.push(code.to_string());
        self.buffer.len() == KONAMI_SEQUENCE.len()
            && self
                .buffer
                .iter()
                .zip(KONAMI_SEQUENCE)
                .all(|(entered, expected)| entered.as_str() == expected)
    }
}

#[cfg(target_arch = "wasm32")]
struct KeyListener {
    closure: Rc<Closure<dyn FnMut(web_sys::KeyboardEvent)>>,
}

/// Timed secret-mode flag: raised for ten seconds when the Konami code is
/// typed, then auto-cleared. Re-typing the code while the flag is up is a
/// no-op. The pending clear timer is cancelled with the component.
pub fn use_secret_mode() -> Signal<bool> {
    let secret = use_signal(|| false);

    #[cfg(target_arch = "wasm32")]
    {
        let tracker = use_signal(KonamiTracker::default);
        let mut listener = use_signal(|| None::<KeyListener>);
        let clear_timer = use_signal(|| None::<Timeout>);

        use_effect(move || {
            if listener.read().is_some() {
                return;
            }
            let Some(document) = web_sys::window().and_then(|window| window.document()) else {
                return;
            };
            tracing::debug!("konami: attach keydown listener");

            let mut tracker = tracker;
            let mut secret_for_key = secret;
            let mut clear_timer_for_key = clear_timer;
            let closure = Rc::new(Closure::wrap(Box::new(
                move |event: web_sys::KeyboardEvent| {
                    let matched = tracker.write().push(&event.code());
                    if !matched || secret_for_key() {
                        return;
                    }
                    tracing::debug!("konami: secret mode raised");
                    secret_for_key.set(true);
                    let mut secret_for_timer = secret_for_key;
                    let mut timer_slot = clear_timer_for_key;
                    clear_timer_for_key.set(Some(Timeout::new(SECRET_WINDOW_MS, move || {
                        secret_for_timer.set(false);
                        timer_slot.set(None);
                    })));
                },
            )
                as Box<dyn FnMut(_)>));

            let _ = document.add_event_listener_with_callback(
                "keydown",
                closure.as_ref().as_ref().unchecked_ref(),
            );
            listener.set(Some(KeyListener { closure }));
        });

        // The Timeout handle lives in its signal and cancels when dropped;
        // only the document listener needs explicit removal.
        use_drop(move || {
            let binding = listener.read();
            let Some(listener) = binding.as_ref() else {
                return;
            };
            if let Some(document) = web_sys::window().and_then(|window| window.document()) {
                let _ = document.remove_event_listener_with_callback(
                    "keydown",
                    listener.closure.as_ref().as_ref().unchecked_ref(),
                );
            }
        });
    }

    secret
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn feed(tracker: &mut KonamiTracker, codes: &[&str]) -> bool {
        codes.iter().fold(false, |_, code| tracker.push(code))
    }

    #[test]
    fn exact_sequence_matches() {
        let mut tracker = KonamiTracker::default();
        assert!(feed(&mut tracker, &KONAMI_SEQUENCE));
    }

    #[test]
    fn buffer_rolls_over_leading_noise() {
        let mut tracker = KonamiTracker::default();
        feed(&mut tracker, &["KeyQ", "KeyW", "KeyE", "Space"]);
        assert!(feed(&mut tracker, &KONAMI_SEQUENCE));
    }

    #[test]
    fn single_differing_code_does_not_match() {
        for wrong_at in 0..KONAMI_SEQUENCE.len() {
            let mut codes = KONAMI_SEQUENCE.to_vec();
            codes[wrong_at] = "KeyX";
            let mut tracker = KonamiTracker::default();
            assert_eq!(feed(&mut tracker, &codes), false, "position {wrong_at}");
        }
    }

    #[test]
    fn short_input_never_matches() {
        let mut tracker = KonamiTracker::default();
        assert!(!feed(&mut tracker, &KONAMI_SEQUENCE[..9]));
    }
}
