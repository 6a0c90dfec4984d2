use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast, JsValue};

/// A section is considered active once it covers at least half the viewport,
/// and stops counting shortly before it scrolls out at the top.
#[cfg(target_arch = "wasm32")]
const VISIBILITY_THRESHOLD: f64 = 0.5;
#[cfg(target_arch = "wasm32")]
const ROOT_MARGIN: &str = "-50px 0px -50% 0px";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Projects,
    Skills,
    Experience,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Experience,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Experience => "Experience",
            Section::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|section| section.id() == id)
    }
}

#[cfg(target_arch = "wasm32")]
struct ObserverHandle {
    observer: web_sys::IntersectionObserver,
    _callback: Rc<Closure<dyn FnMut(js_sys::Array)>>,
}

/// Watches the page sections with an IntersectionObserver and reports which
/// one is currently active. Simultaneous matches resolve last-observed-wins.
pub fn use_scroll_spy() -> Signal<Section> {
    let active = use_signal(|| Section::Home);

    #[cfg(target_arch = "wasm32")]
    {
        let mut handle = use_signal(|| None::<ObserverHandle>);

        use_effect(move || {
            if handle.read().is_some() {
                return;
            }
            let Some(document) = web_sys::window().and_then(|window| window.document()) else {
                return;
            };
            tracing::debug!("scroll-spy: attach observer");

            let mut active_for_callback = active;
            let callback = Rc::new(Closure::wrap(Box::new(move |entries: js_sys::Array| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    if let Some(section) = Section::from_id(&entry.target().id()) {
                        active_for_callback.set(section);
                    }
                }
            }) as Box<dyn FnMut(js_sys::Array)>));

            let options = web_sys::IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(VISIBILITY_THRESHOLD));
            options.set_root_margin(ROOT_MARGIN);

            let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
                callback.as_ref().as_ref().unchecked_ref(),
                &options,
            ) else {
                return;
            };
            for section in Section::ALL {
                if let Some(element) = document.get_element_by_id(section.id()) {
                    observer.observe(&element);
                }
            }

            handle.set(Some(ObserverHandle {
                observer,
                _callback: callback,
            }));
        });

        use_drop(move || {
            if let Some(handle) = handle.read().as_ref() {
                tracing::debug!("scroll-spy: disconnect observer");
                handle.observer.disconnect();
            }
        });
    }

    active
}

/// Smooth-scrolls the viewport to the given section.
pub fn scroll_to(section: Section) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        if let Some(element) = document.get_element_by_id(section.id()) {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = section;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("blog"), None);
    }

    #[test]
    fn sections_follow_page_order() {
        let ids: Vec<&str> = Section::ALL.iter().map(|section| section.id()).collect();
        assert_eq!(
            ids,
            vec!["home", "about", "projects", "skills", "experience", "contact"]
        );
    }
}
