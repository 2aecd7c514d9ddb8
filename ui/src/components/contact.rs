use dioxus::prelude::*;

use crate::config;
use crate::content::{contact_links, ContactKind};
use crate::hooks::use_locale;
use crate::t;

struct ContactCard {
    order: u8,
    class: String,
    href: String,
    target: Option<&'static str>,
    rel: Option<&'static str>,
    icon: &'static str,
    title: String,
    detail: String,
}

#[component]
pub fn Contact() -> Element {
    let _locale = use_locale();
    let site = config::site();

    let mut cards: Vec<ContactCard> = contact_links(site)
        .into_iter()
        .map(|link| {
            let (order, title, detail) = match link.kind {
                ContactKind::Email => (0, t!("contact-email"), site.contact.email.clone()),
                ContactKind::Upwork => (1, link.label.to_string(), t!("contact-upwork")),
                ContactKind::LinkedIn => (2, link.label.to_string(), t!("contact-linkedin")),
            };
            ContactCard {
                order,
                class: format!("card contact-card contact-card--{}", link.css_modifier()),
                target: link.target(),
                rel: link.rel(),
                icon: link.icon(),
                href: link.href,
                title,
                detail,
            }
        })
        .collect();
    cards.sort_by_key(|card| card.order);

    rsx! {
        section { id: "contact", class: "section section--dark contact",
            div { class: "container",
                h2 { class: "section__title", {t!("contact-title")} }
                p { class: "section__subtitle", {t!("contact-subtitle")} }

                div { class: "contact__grid",
                    for ContactCard { order, class, href, target, rel, icon, title, detail } in cards {
                        a { key: "{order}", class: "{class}", href: "{href}", target, rel,
                            span { class: "contact-card__icon", aria_hidden: "true", "{icon}" }
                            h3 { class: "contact-card__title", "{title}" }
                            p { class: "contact-card__detail", "{detail}" }
                        }
                    }
                }
            }
        }
    }
}
