use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use gloo_timers::callback::Timeout;

#[cfg(target_arch = "wasm32")]
const TOAST_DISMISS_MS: u32 = 5_000;

#[derive(Clone, Debug, PartialEq)]
pub struct Achievement {
    pub id: u64,
    pub name: String,
    pub unlocked_at: f64,
}

/// Session-scoped, append-only list of unlocked achievements, deduplicated
/// by name. Never persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AchievementLog {
    entries: Vec<Achievement>,
    next_id: u64,
}

impl AchievementLog {
    /// Returns true when the name was fresh and an entry was appended.
    pub fn unlock(&mut self, name: &str, unlocked_at: f64) -> bool {
        if self.entries.iter().any(|entry| entry.name == name) {
            return false;
        }
        self.next_id += 1;
        self.entries.push(Achievement {
            id: self.next_id,
            name: name.to_string(),
            unlocked_at,
        });
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&Achievement> {
        self.entries.last()
    }
}

/// Display policy for the toast slot: the newest entry that has not been
/// shown yet, or nothing. Not a queue — rapid unlocks skip straight to the
/// latest one.
pub fn latest_unshown(log: &AchievementLog, last_shown_id: u64) -> Option<Achievement> {
    log.latest().filter(|entry| entry.id > last_shown_id).cloned()
}

#[derive(Clone, Copy)]
pub struct Achievements {
    log: Signal<AchievementLog>,
}

impl Achievements {
    pub fn unlock(&mut self, name: &str) {
        let fresh = self.log.write().unlock(name, now_ms());
        if !fresh {
            return;
        }
        tracing::debug!("achievements: unlocked {name}");
        notify(name);
    }

    pub fn count(&self) -> usize {
        self.log.read().len()
    }

    pub fn latest(&self) -> Option<Achievement> {
        self.log.read().latest().cloned()
    }
}

/// Provides the achievement log to the whole tree and asks for notification
/// permission once if the user has not decided yet.
pub fn use_achievements() -> Achievements {
    let achievements = use_context_provider(|| Achievements {
        log: Signal::new(AchievementLog::default()),
    });
    use_effect(|| request_notification_permission());
    achievements
}

fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}

/// System notification for a fresh unlock. Only fires when permission was
/// already granted; absence of the capability degrades silently.
fn notify(name: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        use web_sys::{Notification, NotificationOptions, NotificationPermission};
        if Notification::permission() != NotificationPermission::Granted {
            return;
        }
        let options = NotificationOptions::new();
        options.set_body(name);
        options.set_icon("/icon.png");
        let _ = Notification::new_with_options("🎉 Achievement Unlocked!", &options);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = name;
}

fn request_notification_permission() {
    #[cfg(target_arch = "wasm32")]
    {
        use web_sys::{Notification, NotificationPermission};
        if Notification::permission() != NotificationPermission::Default {
            return;
        }
        if let Ok(promise) = Notification::request_permission() {
            wasm_bindgen_futures::spawn_local(async move {
                let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
            });
        }
    }
}

/// Transient on-page toast for the most recent unlock. One toast at a time,
/// auto-dismissed after five seconds; the dismiss timer is cancelled when it
/// is replaced or the component unmounts.
#[component]
pub fn AchievementToast() -> Element {
    let achievements = use_context::<Achievements>();
    let mut toast = use_signal(|| None::<Achievement>);
    let mut last_shown = use_signal(|| 0u64);
    #[cfg(target_arch = "wasm32")]
    let mut dismiss_timer = use_signal(|| None::<Timeout>);

    use_effect(move || {
        let candidate = latest_unshown(&achievements.log.read(), *last_shown.peek());
        if toast.read().is_some() {
            return;
        }
        let Some(candidate) = candidate else {
            return;
        };
        last_shown.set(candidate.id);
        toast.set(Some(candidate));
        #[cfg(target_arch = "wasm32")]
        {
            let mut toast_for_timer = toast;
            let mut timer_slot = dismiss_timer;
            dismiss_timer.set(Some(Timeout::new(TOAST_DISMISS_MS, move || {
                toast_for_timer.set(None);
                timer_slot.set(None);
            })));
        }
    });

    let Some(current) = toast() else {
        return rsx! {};
    };

    rsx! {
        div { class: "achievement-toast",
            span { class: "achievement-toast-icon", "🏆" }
            div { class: "achievement-toast-copy",
                p { class: "achievement-toast-title", "Achievement Unlocked!" }
                p { class: "achievement-toast-name", "{current.name}" }
            }
            button {
                r#type: "button",
                class: "achievement-toast-close",
                onclick: move |_| {
                    toast.set(None);
                    #[cfg(target_arch = "wasm32")]
                    dismiss_timer.set(None);
                },
                "✕"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unlock_is_idempotent_per_name() {
        let mut log = AchievementLog::default();
        assert!(log.unlock("First Contact", 1.0));
        for _ in 0..4 {
            assert!(!log.unlock("First Contact", 2.0));
        }
        assert_eq!(log.len(), 1);
        assert_eq!(log.latest().unwrap().unlocked_at, 1.0);
    }

    #[test]
    fn entries_keep_unlock_order_and_distinct_ids() {
        let mut log = AchievementLog::default();
        log.unlock("Portfolio Explorer", 1.0);
        log.unlock("Early Visitor", 2.0);
        log.unlock("Visited Projects", 3.0);
        let ids: Vec<u64> = (1..=3).collect();
        assert_eq!(
            log.entries.iter().map(|entry| entry.id).collect::<Vec<_>>(),
            ids
        );
        assert_eq!(log.latest().unwrap().name, "Visited Projects");
    }

    #[test]
    fn toast_policy_shows_latest_unshown_not_a_queue() {
        let mut log = AchievementLog::default();
        log.unlock("a", 1.0);
        let first = latest_unshown(&log, 0).unwrap();
        assert_eq!(first.name, "a");

        // Two more unlock while "a" is still on screen; once the slot frees
        // up, only the newest is offered and "b" is skipped.
        log.unlock("b", 2.0);
        log.unlock("c", 3.0);
        let next = latest_unshown(&log, first.id).unwrap();
        assert_eq!(next.name, "c");
        assert_eq!(latest_unshown(&log, next.id), None);
    }

    #[test]
    fn empty_log_offers_no_toast() {
        let log = AchievementLog::default();
        assert!(log.is_empty());
        assert_eq!(latest_unshown(&log, 0), None);
    }
}
