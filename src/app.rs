use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use gloo_timers::callback::Timeout;

use crate::achievements::{use_achievements, AchievementToast, Achievements};
use crate::config::use_runtime_config;
use crate::contact::ContactSection;
use crate::konami::use_secret_mode;
use crate::magnetic::use_magnetic_cursor;
use crate::metrics::LiveMetrics;
use crate::navbar::Navbar;
use crate::particles::ParticlesBackground;
use crate::scroll_spy::{scroll_to, use_scroll_spy, Section};
use crate::sections::{About, ExperienceTimeline, Footer, Hero, Projects, Skills};
use crate::theme::use_theme;
use crate::voice::{use_voice_listener, VoiceCommand};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[cfg(target_arch = "wasm32")]
const EARLY_VISITOR_DELAY_MS: u32 = 5_000;

#[component]
pub fn App() -> Element {
    let config_resource = use_runtime_config();
    let Some(config) = config_resource() else {
        return rsx! {
            document::Title { "Sohib Nimer | Portfolio" }
            div { class: "page loading",
                h1 { "Loading..." }
            }
        };
    };
    use_context_provider(|| config);

    let theme = use_theme();
    let achievements = use_achievements();
    let active = use_scroll_spy();
    let secret_mode = use_secret_mode();
    use_magnetic_cursor();

    let menu_open = use_signal(|| false);
    let navigate =
        use_callback(move |section: Section| go_to_section(section, menu_open, achievements));

    let on_command = use_callback(move |command: VoiceCommand| match command {
        VoiceCommand::GoTo(section) => navigate.call(section),
        VoiceCommand::ToggleTheme => {
            let mut theme = theme;
            let next = theme().toggled();
            theme.set(next);
        }
    });
    let voice = use_voice_listener(on_command);

    // Session achievements: one on arrival, one for sticking around.
    let mut booted = use_signal(|| false);
    #[cfg(target_arch = "wasm32")]
    let mut early_visitor_timer = use_signal(|| None::<Timeout>);
    use_effect(move || {
        if booted() {
            return;
        }
        booted.set(true);
        let mut achievements = achievements;
        achievements.unlock("Portfolio Explorer");
        #[cfg(target_arch = "wasm32")]
        {
            let mut timer_slot = early_visitor_timer;
            early_visitor_timer.set(Some(Timeout::new(EARLY_VISITOR_DELAY_MS, move || {
                let mut achievements = achievements;
                achievements.unlock("Early Visitor");
                timer_slot.set(None);
            })));
        }
    });

    let listening = voice.listening;
    let transcript = voice.transcript;
    let voice_error = voice.error;

    rsx! {
        document::Title { "Sohib Nimer | Portfolio" }
        document::Meta { name: "description", content: "Portfolio of Sohib Nimer, full-stack developer." }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: if secret_mode() { "page secret-mode" } else { "page" },
            if secret_mode() {
                div { class: "secret-overlay" }
            }
            ParticlesBackground {}
            LiveMetrics {}
            Navbar {
                active: active(),
                theme,
                listening,
                menu_open,
                on_navigate: move |section| navigate.call(section),
            }
            if listening() {
                div { class: "listening-pill", "🎤 Listening... {transcript}" }
            }
            if let Some(message) = voice_error() {
                div { class: "listening-pill error", "{message}" }
            }
            main {
                Hero { on_navigate: move |section| navigate.call(section) }
                About {}
                Projects {}
                Skills {}
                ExperienceTimeline {}
                ContactSection {}
            }
            Footer {}
            AchievementToast {}
        }
    }
}

/// Shared navigation action, reached from the navbar, the hero buttons and
/// voice commands alike: collapse the mobile menu, scroll, record the visit.
fn go_to_section(section: Section, mut menu_open: Signal<bool>, mut achievements: Achievements) {
    menu_open.set(false);
    scroll_to(section);
    achievements.unlock(&format!("Visited {}", section.label()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn harness() -> Element {
        let menu_open = use_signal(|| true);
        let achievements = use_achievements();
        go_to_section(Section::Projects, menu_open, achievements);
        assert!(!menu_open());
        assert_eq!(achievements.count(), 1);
        rsx! {}
    }

    // Navigation from any source, voice included, must also fold the mobile
    // menu away, not just the menu's own buttons.
    #[test]
    fn navigation_collapses_the_mobile_menu() {
        let mut dom = VirtualDom::new(harness);
        dom.rebuild_in_place();
    }
}
