use dioxus::prelude::*;

use crate::config;
use crate::content::HERO_TITLES;
use crate::hooks::{use_locale, use_rotator};
use crate::t;

/// Landing banner with the rotating job title.
#[component]
pub fn Hero() -> Element {
    let _locale = use_locale();
    let rotation = use_rotator(config::site().hero_interval_ms, HERO_TITLES.len());

    let index = rotation.read().index();
    let title = HERO_TITLES.get(index).copied().unwrap_or_default();

    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero__backdrop", aria_hidden: "true" }
            div { class: "hero__content",
                p { class: "hero__greeting", {t!("hero-greeting")} }
                h1 { class: "hero__name",
                    span { class: "text-gradient text-gradient--animated", {t!("hero-name")} }
                }

                div { class: "hero__rotator", aria_live: "polite",
                    // Keyed by index so the flip-in animation restarts on every change.
                    for current in std::iter::once(index) {
                        h2 { key: "{current}", class: "hero__title",
                            span { class: "text-gradient", "{title}" }
                        }
                    }
                }

                p { class: "hero__subtitle", {t!("hero-subtitle")} }

                div { class: "hero__badges",
                    div { class: "badge-pill badge-pill--blue",
                        span { class: "badge-pill__icon", aria_hidden: "true", "★" }
                        span { {t!("hero-badge-job-success")} }
                    }
                    div { class: "badge-pill badge-pill--pink",
                        span { class: "badge-pill__icon", aria_hidden: "true", "🏅" }
                        span { {t!("hero-badge-top-rated")} }
                    }
                }
            }
        }
    }
}
