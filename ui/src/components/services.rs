use dioxus::prelude::*;

use crate::config;
use crate::content::SERVICES;
use crate::hooks::{use_carousel, use_locale};
use crate::i18n;
use crate::t;

struct CardView {
    key: String,
    class: String,
    icon: &'static str,
    title: String,
    description: String,
}

/// Services carousel: autoplay paused while hovered, arrows and dots for
/// manual navigation, three cards with the focal one emphasized.
#[component]
pub fn Services() -> Element {
    let _locale = use_locale();
    let mut carousel = use_carousel(config::site().carousel_interval_ms, SERVICES.len());

    let snapshot = carousel.read().clone();
    let active = snapshot.index();
    let direction = snapshot.direction().css_modifier();

    let cards: Vec<CardView> = snapshot
        .visible_window()
        .slots
        .iter()
        .filter_map(|slot| {
            let service = SERVICES.get(slot.index)?;
            let role = if slot.focal {
                "service-card--focal"
            } else {
                "service-card--side"
            };
            Some(CardView {
                key: format!("{}-{}", service.key, slot.index),
                class: format!(
                    "service-card service-card--{} {role} service-card--enter-{direction}",
                    service.accent
                ),
                icon: service.icon,
                title: i18n::lookup(service.title_key),
                description: i18n::lookup(service.description_key),
            })
        })
        .collect();

    let dots: Vec<(usize, &'static str, String)> = (0..SERVICES.len())
        .map(|index| {
            let class = if index == active {
                "carousel__dot carousel__dot--active"
            } else {
                "carousel__dot"
            };
            let number = (index + 1).to_string();
            (index, class, t!("services-go-to", number = number))
        })
        .collect();

    rsx! {
        section { id: "services", class: "section section--dark services",
            div { class: "container container--wide",
                h2 { class: "section__title", {t!("services-title")} }

                div {
                    class: "carousel",
                    onmouseenter: move |_| carousel.with_mut(|c| c.pause()),
                    onmouseleave: move |_| carousel.with_mut(|c| c.resume()),

                    button {
                        r#type: "button",
                        class: "carousel__arrow carousel__arrow--prev",
                        aria_label: t!("services-prev"),
                        onclick: move |_| carousel.with_mut(|c| c.prev()),
                        "‹"
                    }
                    button {
                        r#type: "button",
                        class: "carousel__arrow carousel__arrow--next",
                        aria_label: t!("services-next"),
                        onclick: move |_| carousel.with_mut(|c| c.next()),
                        "›"
                    }

                    div { class: "carousel__track",
                        for CardView { key, class, icon, title, description } in cards {
                            article { key: "{key}", class: "{class}",
                                div { class: "service-card__icon", aria_hidden: "true", "{icon}" }
                                h3 { class: "service-card__title", "{title}" }
                                p { class: "service-card__description", "{description}" }
                            }
                        }
                    }

                    div { class: "carousel__dots",
                        for (index, class, label) in dots {
                            button {
                                key: "{index}",
                                r#type: "button",
                                class: "{class}",
                                aria_label: "{label}",
                                onclick: move |_| carousel.with_mut(|c| c.jump_to(index)),
                            }
                        }
                    }
                }
            }
        }
    }
}
