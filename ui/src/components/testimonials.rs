use dioxus::prelude::*;

use crate::content::TESTIMONIALS;
use crate::hooks::use_locale;
use crate::t;

#[component]
pub fn Testimonials() -> Element {
    let _locale = use_locale();

    let cards: Vec<(u32, String, &'static str, &'static str, &'static str)> = TESTIMONIALS
        .iter()
        .map(|item| {
            (
                item.id,
                "★".repeat(usize::from(item.rating)),
                item.text,
                item.project,
                item.date,
            )
        })
        .collect();

    rsx! {
        section { id: "testimonials", class: "section section--dark testimonials",
            div { class: "container container--wide",
                h2 { class: "section__title", {t!("testimonials-title")} }
                p { class: "section__subtitle",
                    span { class: "brand-upwork", aria_hidden: "true", "Up" }
                    {t!("testimonials-subtitle")}
                }

                div { class: "testimonials__grid",
                    for (id, stars, text, project, date) in cards {
                        article { key: "{id}", class: "card testimonial",
                            span { class: "testimonial__quote", aria_hidden: "true", "“" }
                            div { class: "testimonial__stars", "{stars}" }
                            // Quotes stay in English: they are verbatim client reviews.
                            p { class: "testimonial__text", lang: "en", "\"{text}\"" }
                            div { class: "testimonial__footer",
                                p { class: "testimonial__project", lang: "en", "{project}" }
                                p { class: "testimonial__date", "{date}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
