use dioxus::prelude::*;

use crate::content::CV_PATH;
use crate::scroll_spy::Section;
use crate::theme::Theme;

/// Fixed top navigation: brand mark, theme and mic toggles, section links
/// highlighted by the scroll spy, and a collapsible mobile menu. The menu
/// flag lives with the caller, which also clears it on every navigation.
#[component]
pub fn Navbar(
    active: Section,
    theme: Signal<Theme>,
    listening: Signal<bool>,
    menu_open: Signal<bool>,
    on_navigate: EventHandler<Section>,
) -> Element {
    rsx! {
        nav { class: "navbar",
            div { class: "navbar-inner",
                div { class: "navbar-left",
                    p { class: "brand magnetic", "SN" }
                    button {
                        r#type: "button",
                        class: "button ghost small magnetic",
                        onclick: move |_| {
                            let mut theme = theme;
                            let next = theme().toggled();
                            theme.set(next);
                        },
                        if theme().is_dark() { "🌙 Dark" } else { "☀️ Light" }
                    }
                    button {
                        r#type: "button",
                        class: if listening() { "mic-button active magnetic" } else { "mic-button magnetic" },
                        aria_label: "Toggle voice commands",
                        onclick: move |_| {
                            let mut listening = listening;
                            let next = !listening();
                            listening.set(next);
                        },
                        if listening() { "🔇" } else { "🎤" }
                    }
                }
                div { class: "navbar-links",
                    for section in Section::ALL {
                        button {
                            r#type: "button",
                            class: if section == active { "nav-link active magnetic" } else { "nav-link magnetic" },
                            onclick: move |_| on_navigate.call(section),
                            "{section.label()}"
                        }
                    }
                    a {
                        class: "button primary small magnetic",
                        href: CV_PATH,
                        download: true,
                        "⬇ Download CV"
                    }
                }
                button {
                    r#type: "button",
                    class: "menu-toggle",
                    aria_label: "Toggle menu",
                    onclick: move |_| {
                        let mut menu_open = menu_open;
                        let next = !menu_open();
                        menu_open.set(next);
                    },
                    if menu_open() { "✕" } else { "☰" }
                }
            }
            if menu_open() {
                div { class: "navbar-mobile",
                    for section in Section::ALL {
                        button {
                            r#type: "button",
                            class: "nav-link block",
                            onclick: move |_| on_navigate.call(section),
                            "{section.label()}"
                        }
                    }
                }
            }
        }
    }
}
