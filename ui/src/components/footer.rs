use dioxus::prelude::*;

use crate::config;
use crate::hooks::use_locale;
use crate::t;

#[component]
pub fn Footer() -> Element {
    let _locale = use_locale();
    let contact = &config::site().contact;
    let upwork = contact.upwork.clone();
    let linkedin = contact.linkedin.clone();

    rsx! {
        footer { class: "footer",
            div { class: "container footer__inner",
                div { class: "footer__name text-gradient", {t!("nav-brand")} }

                div { class: "footer__social",
                    a {
                        class: "footer__social-link footer__social-link--upwork",
                        href: "{upwork}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        aria_label: "Upwork",
                        "Up"
                    }
                    a {
                        class: "footer__social-link footer__social-link--linkedin",
                        href: "{linkedin}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        aria_label: "LinkedIn",
                        "in"
                    }
                }

                div { class: "footer__legal",
                    p { class: "footer__rights", {t!("footer-rights")} }
                    p { class: "footer__credits", {t!("footer-credits")} }
                }
            }
        }
    }
}
