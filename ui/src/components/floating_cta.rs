use dioxus::prelude::*;

use crate::config;
use crate::content::contact_links;
use crate::hooks::use_locale;

/// Bob animation offsets for the three buttons, in seconds.
const BOB_DELAYS: [f64; 3] = [0.0, 0.3, 0.6];

struct CtaButton {
    label: &'static str,
    class: String,
    href: String,
    target: Option<&'static str>,
    rel: Option<&'static str>,
    icon: &'static str,
    style: String,
}

/// Floating contact buttons docked on the trailing edge: right for LTR,
/// left for RTL.
#[component]
pub fn FloatingCta() -> Element {
    let locale = use_locale();
    let rtl = locale.direction().is_rtl();

    let dock_class = if rtl {
        "floating-cta floating-cta--rtl"
    } else {
        "floating-cta"
    };

    let buttons: Vec<CtaButton> = contact_links(config::site())
        .into_iter()
        .zip(BOB_DELAYS)
        .map(|(link, delay)| CtaButton {
            label: link.label,
            class: format!("floating-cta__bubble floating-cta__bubble--{}", link.css_modifier()),
            target: link.target(),
            rel: link.rel(),
            icon: link.icon(),
            href: link.href,
            style: format!("animation-delay: {delay:.1}s"),
        })
        .collect();

    rsx! {
        div { class: "{dock_class}",
            for CtaButton { label, class, href, target, rel, icon, style } in buttons {
                a { key: "{label}", class: "floating-cta__link", href: "{href}", target, rel, aria_label: "{label}",
                    div { class: "{class}", style: "{style}", "{icon}" }
                    span { class: "floating-cta__tooltip", "{label}" }
                }
            }
        }
    }
}
