use dioxus::prelude::*;

use crate::achievements::Achievements;
use crate::content::{
    EXPERIENCES, HERO_STATS, OWNER_NAME, OWNER_TAGLINE, PROFILE_FACTS, PROJECTS, SKILL_GROUPS,
};
use crate::scroll_spy::Section;

#[component]
pub fn Hero(on_navigate: EventHandler<Section>) -> Element {
    rsx! {
        section { id: "home", class: "section section-hero",
            div { class: "hero-inner",
                h1 { class: "hero-name", "{OWNER_NAME}" }
                p { class: "hero-tagline", "{OWNER_TAGLINE}" }
                p { class: "hero-blurb",
                    "Building the future with code • Interactive experiences • Cutting-edge technology"
                }
                div { class: "hero-actions",
                    button {
                        r#type: "button",
                        class: "button primary magnetic",
                        onclick: move |_| on_navigate.call(Section::Projects),
                        "🚀 View Projects"
                    }
                    button {
                        r#type: "button",
                        class: "button outline magnetic",
                        onclick: move |_| on_navigate.call(Section::Contact),
                        "💬 Contact Me"
                    }
                }
                div { class: "hero-stats",
                    for stat in HERO_STATS.iter() {
                        div { class: "hero-stat",
                            p { class: "hero-stat-value", "{stat.value}" }
                            p { class: "muted", "{stat.label}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn About() -> Element {
    let achievements = use_context::<Achievements>();
    let unlocked = achievements.count();

    rsx! {
        section { id: "about", class: "section",
            div { class: "section-inner",
                h2 { class: "section-heading", span { class: "section-icon", "👤" } "About Me" }
                div { class: "about-grid",
                    div { class: "card about-card",
                        h3 { class: "card-title", "The Developer" }
                        p { class: "about-copy",
                            "I don't just write code—I craft experiences. With expertise in modern web technologies and a passion for innovation, I build applications that are not only functional but unforgettable."
                        }
                        div { class: "badge-row",
                            span { class: "badge", "🎯 Problem Solver" }
                            span { class: "badge", "⚡ Fast Learner" }
                            span { class: "badge", "🔥 Passionate" }
                        }
                    }
                    div { class: "fact-grid",
                        for fact in PROFILE_FACTS.iter() {
                            div { class: "card fact-card",
                                span { class: "fact-icon", "{fact.icon}" }
                                h4 { class: "fact-title", "{fact.title}" }
                                p { class: "muted", "{fact.detail}" }
                            }
                        }
                        div { class: "card fact-card",
                            span { class: "fact-icon", "🏆" }
                            h4 { class: "fact-title", "Achievements" }
                            p { class: "muted", "{unlocked} Unlocked" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Projects() -> Element {
    rsx! {
        section { id: "projects", class: "section section-alt",
            div { class: "section-inner",
                h2 { class: "section-heading", span { class: "section-icon", "💻" } "Projects" }
                div { class: "project-grid",
                    for project in PROJECTS.iter() {
                        div { class: "card project-card",
                            div { class: "project-head",
                                h3 { class: "card-title", "{project.name}" }
                                span { class: "muted", "★ {project.stars}" }
                            }
                            p { class: "muted", "{project.description}" }
                            div { class: "tag-row",
                                for tech in project.technologies.iter() {
                                    span { class: "badge", "{tech}" }
                                }
                            }
                            div { class: "project-foot",
                                div { class: "project-links",
                                    a {
                                        href: "{project.github_url}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        class: "icon-link",
                                        "GitHub"
                                    }
                                    if let Some(live_url) = project.live_url {
                                        a {
                                            href: "{live_url}",
                                            target: "_blank",
                                            rel: "noopener noreferrer",
                                            class: "icon-link",
                                            "Live ↗"
                                        }
                                    }
                                }
                                span { class: "muted small-print", "Updated {project.updated}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Skills() -> Element {
    rsx! {
        section { id: "skills", class: "section",
            div { class: "section-inner",
                h2 { class: "section-heading", span { class: "section-icon", "🛠" } "Skills" }
                div { class: "skills-grid",
                    for group in SKILL_GROUPS.iter() {
                        div { class: "card",
                            h3 { class: "card-title", "{group.category}" }
                            div { class: "tag-row",
                                for skill in group.skills.iter() {
                                    span { class: "badge large", "{skill}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ExperienceTimeline() -> Element {
    rsx! {
        section { id: "experience", class: "section section-alt",
            div { class: "section-inner",
                h2 { class: "section-heading", span { class: "section-icon", "💼" } "Experience" }
                div { class: "experience-list",
                    for experience in EXPERIENCES.iter() {
                        div { class: "card experience-card",
                            div { class: "experience-head",
                                div {
                                    h3 { class: "card-title", "{experience.role}" }
                                    p { class: "experience-company", "{experience.company}" }
                                }
                                span { class: "muted", "{experience.period}" }
                            }
                            p { class: "muted", "{experience.description}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            p { class: "muted", "© 2025 {OWNER_NAME} • Built with Rust + Dioxus" }
            p { class: "muted small-print", "Crafted with ❤️ and way too much coffee" }
        }
    }
}
