#![cfg(test)]
/*!
Theme selector lint for the web build.

Purpose:
- Ensure the classes emitted by the shared `ui` sections stay styled in
  ui/assets/theme/main.css and ui/assets/styling/navbar.css.
- Fail fast if a refactor drops or renames a state modifier (scrolled header,
  focal carousel card, open timeline card, RTL dock), since those regressions
  only show up visually.

How it works:
- Both stylesheets are embedded with `include_str!` from the shared `ui/` location.
- A substring presence check per selector. If you rename a class on purpose:
    1. Update the component markup.
    2. Adjust the lists below.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

const REQUIRED_THEME_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".site {",
    ".section--dark",
    ".section--alt",
    ".container--wide",
    ".visually-hidden",
    ".text-gradient--animated",
    // Hero rotator
    ".hero__rotator",
    ".hero__title",
    ".badge-pill--blue",
    ".badge-pill--pink",
    // Services carousel
    ".carousel__track",
    ".carousel__arrow--prev",
    ".carousel__arrow--next",
    ".carousel__dot--active",
    ".service-card--focal",
    ".service-card--side",
    ".service-card--enter-forward",
    ".service-card--enter-backward",
    ".service-card--purple",
    ".service-card--blue",
    ".service-card--green",
    // Skills
    ".skill-meter__bar--filled",
    ".skill-ring__progress",
    ".skill-row__level",
    // Timeline
    ".timeline-card--active",
    ".timeline-card__details--open",
    ".badge--purple",
    // Contact + floating CTA
    ".contact-card--email",
    ".contact-card--upwork",
    ".contact-card--linkedin",
    ".floating-cta--rtl",
    ".floating-cta__bubble--email",
    ".floating-cta__tooltip",
    // Footer
    ".footer__social-link--linkedin",
    // Responsive block
    "@media (max-width: 640px)",
];

const REQUIRED_NAVBAR_SELECTORS: &[&str] = &[
    ".navbar {",
    ".navbar--scrolled",
    ".navbar__links",
    ".navbar__locale-btn--active",
    ".navbar__menu-toggle",
    ".navbar__mobile {",
    ".navbar__mobile-link",
    ".navbar__mobile-locale",
];

fn missing<'a>(css: &str, selectors: &[&'a str]) -> Vec<&'a str> {
    selectors
        .iter()
        .copied()
        .filter(|sel| !css.contains(sel))
        .collect()
}

#[test]
fn theme_contains_required_selectors() {
    let missing = missing(THEME_CSS, REQUIRED_THEME_SELECTORS);
    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in main.css:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn navbar_stylesheet_contains_required_selectors() {
    let missing = missing(NAVBAR_CSS, REQUIRED_NAVBAR_SELECTORS);
    assert!(
        missing.is_empty(),
        "Missing navbar selectors:\n{}",
        missing.join("\n")
    );
}

#[test]
fn theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Theme appears unexpectedly small ({non_ws_len} non-whitespace chars); \
         did the file get truncated or path change?"
    );
}

#[test]
fn rtl_overrides_are_present() {
    // Mirrored layout relies on these pairings.
    let dock = THEME_CSS.contains(".floating-cta--rtl .floating-cta__tooltip");
    let timeline = THEME_CSS.contains("[dir=\"rtl\"] .timeline-card--active");
    assert!(
        dock && timeline,
        "RTL overrides missing (dock tooltip: {dock}, timeline: {timeline})"
    );
}
