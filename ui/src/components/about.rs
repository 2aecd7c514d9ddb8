use dioxus::prelude::*;

use crate::content::ABOUT_HIGHLIGHTS;
use crate::hooks::use_locale;
use crate::i18n;
use crate::t;

#[component]
pub fn About() -> Element {
    let _locale = use_locale();

    let highlights: Vec<(&'static str, &'static str, String)> = ABOUT_HIGHLIGHTS
        .iter()
        .map(|(icon, key)| (*key, *icon, i18n::lookup(key)))
        .collect();

    rsx! {
        section { id: "about", class: "section section--alt about",
            div { class: "container",
                h2 { class: "section__title", {t!("about-title")} }
                p { class: "about__description", {t!("about-description")} }

                div { class: "about__badge",
                    div { class: "about__badge-value text-gradient", {t!("about-experience")} }
                    div { class: "about__badge-label", {t!("about-experience-label")} }
                }

                div { class: "about__highlights",
                    for (key, icon, text) in highlights {
                        div { key: "{key}", class: "card about__highlight",
                            span { class: "about__highlight-icon", aria_hidden: "true", "{icon}" }
                            p { "{text}" }
                        }
                    }
                }
            }
        }
    }
}
