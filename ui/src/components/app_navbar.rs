use crate::config;
use crate::content::NAV_SECTIONS;
use crate::core::locale::{Locale, LocaleStore};
use crate::hooks::{switch_locale, use_locale, use_scroll_flag};
use crate::i18n;
use crate::t;
use dioxus::prelude::*;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Switcher order: Hebrew first, matching the original header.
const SWITCHER_ORDER: [Locale; 2] = [Locale::He, Locale::En];

/// Fixed site header: section anchors, language switcher and the mobile menu.
///
/// The header turns solid once the window scrolls past the configured
/// threshold. Locale changes go through the shared `LocaleStore` context
/// (provided by the page) so every section re-renders with the new bundle;
/// without a store the buttons are inert.
#[component]
pub fn AppNavbar() -> Element {
    let locale = use_locale();
    let store: Option<Signal<LocaleStore>> = try_use_context::<Signal<LocaleStore>>();
    let scrolled = use_scroll_flag(config::site().scroll_threshold_px);
    let mut menu_open = use_signal(|| false);

    tracing::debug!(%locale, "[i18n] AppNavbar render");

    let change_locale = move |target: Locale| {
        if let Some(store) = store {
            switch_locale(store, target.code());
        }
    };

    let links: Vec<(String, String)> = NAV_SECTIONS
        .iter()
        .map(|(anchor, key)| (format!("#{anchor}"), i18n::lookup(key)))
        .collect();

    let switcher: Vec<(Locale, &'static str, &'static str)> = SWITCHER_ORDER
        .iter()
        .map(|&target| {
            let class = if target == locale {
                "navbar__locale-btn navbar__locale-btn--active"
            } else {
                "navbar__locale-btn"
            };
            (target, target.native_name(), class)
        })
        .collect();

    let header_class = if scrolled() {
        "navbar navbar--scrolled"
    } else {
        "navbar"
    };
    let is_open = menu_open();
    let brand = t!("nav-brand");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header {
            id: "navbar",
            class: "{header_class}",
            div { class: "navbar__inner",
                a { class: "navbar__brand", href: "#home",
                    span { class: "navbar__brand-spark", aria_hidden: "true" }
                    span { class: "navbar__brand-mark", "{brand}" }
                }

                nav { class: "navbar__links",
                    for (href, label) in links.clone() {
                        a { key: "{href}", class: "navbar__link", href: "{href}", "{label}" }
                    }
                    div { class: "navbar__locale",
                        span { class: "visually-hidden", {t!("nav-language-label")} }
                        for (target, name, class) in switcher.clone() {
                            button {
                                key: "{target}",
                                r#type: "button",
                                class: "{class}",
                                lang: "{target}",
                                onclick: move |_| change_locale(target),
                                "{name}"
                            }
                        }
                    }
                }

                button {
                    r#type: "button",
                    class: "navbar__menu-toggle",
                    aria_label: t!("nav-toggle-menu"),
                    aria_expanded: "{is_open}",
                    onclick: move |_| menu_open.set(!is_open),
                    if is_open { "✕" } else { "☰" }
                }
            }

            if is_open {
                div { class: "navbar__mobile",
                    for (href, label) in links {
                        a {
                            key: "{href}",
                            class: "navbar__mobile-link",
                            href: "{href}",
                            onclick: move |_| menu_open.set(false),
                            "{label}"
                        }
                    }
                    div { class: "navbar__mobile-locale",
                        for (target, name, class) in switcher {
                            button {
                                key: "{target}",
                                r#type: "button",
                                class: "{class}",
                                lang: "{target}",
                                onclick: move |_| {
                                    change_locale(target);
                                    menu_open.set(false);
                                },
                                "{name}"
                            }
                        }
                    }
                }
            }
        }
    }
}
