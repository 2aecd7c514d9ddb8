use dioxus::prelude::*;

use crate::content::EXPERIENCE;
use crate::hooks::{use_hover, use_locale};
use crate::t;

struct EntryView {
    id: u32,
    class: &'static str,
    details_class: &'static str,
    icon: &'static str,
    company: &'static str,
    role: &'static str,
    date: &'static str,
    description: &'static str,
    tags: Vec<(&'static str, String)>,
}

/// Career timeline. Hovering a card expands its description; only one card
/// is expanded at a time.
#[component]
pub fn ExperienceTimeline() -> Element {
    let _locale = use_locale();
    let mut hover = use_hover::<u32>();

    let entries: Vec<EntryView> = {
        let registry = hover.read();
        EXPERIENCE
            .iter()
            .map(|exp| {
                let active = registry.is_active(&exp.id);
                EntryView {
                    id: exp.id,
                    class: if active {
                        "timeline-card timeline-card--active"
                    } else {
                        "timeline-card"
                    },
                    details_class: if active {
                        "timeline-card__details timeline-card__details--open"
                    } else {
                        "timeline-card__details"
                    },
                    icon: exp.icon,
                    company: exp.company,
                    role: exp.role,
                    date: exp.date,
                    description: exp.description,
                    tags: exp
                        .skills
                        .iter()
                        .map(|tag| (tag.label, format!("badge badge--{}", tag.tone)))
                        .collect(),
                }
            })
            .collect()
    };

    rsx! {
        section { id: "experience", class: "section section--alt experience",
            div { class: "container",
                h2 { class: "section__title", {t!("experience-title")} }

                div { class: "timeline",
                    div { class: "timeline__line", aria_hidden: "true" }
                    for EntryView { id, class, details_class, icon, company, role, date, description, tags } in entries {
                        div {
                            key: "{id}",
                            class: "timeline__entry",
                            onmouseenter: move |_| hover.with_mut(|h| h.set_active(id)),
                            onmouseleave: move |_| hover.with_mut(|h| h.clear()),

                            div { class: "timeline__icon", aria_hidden: "true", "{icon}" }

                            div { class: "{class}", lang: "en",
                                div { class: "timeline-card__header",
                                    span { class: "timeline-card__icon-mobile", aria_hidden: "true", "{icon}" }
                                    div { class: "timeline-card__heading",
                                        h3 { class: "timeline-card__company", "{company}" }
                                        p { class: "timeline-card__role", "{role}" }
                                    }
                                    span { class: "timeline-card__date", "{date}" }
                                }

                                div { class: "{details_class}",
                                    p { "{description}" }
                                }

                                div { class: "timeline-card__tags",
                                    for (label, tag_class) in tags {
                                        span { key: "{label}", class: "{tag_class}", "{label}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
