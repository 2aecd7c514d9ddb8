//! Switching the active bundle at runtime.
//!
//! The loader is process-global, so every switch lives in one test to keep
//! the sequence deterministic under the parallel test runner.

use ui::core::{Locale, LocaleStore};
use ui::i18n;

const FSI: char = '\u{2068}';
const PDI: char = '\u{2069}';

fn assert_unisolated(rendered: &str) {
    assert!(
        !rendered.contains(FSI) && !rendered.contains(PDI),
        "placeable wrapped in bidi isolation marks: {rendered:?}"
    );
}

#[test]
fn switching_locale_swaps_the_active_bundle() {
    i18n::init();

    i18n::set_locale(Locale::En).expect("select en");
    assert_eq!(i18n::active_locale(), Locale::En);
    let english = i18n::lookup("nav-home");

    i18n::set_locale(Locale::He).expect("select he");
    assert_eq!(i18n::active_locale(), Locale::He);
    let hebrew = i18n::lookup("nav-home");
    assert_ne!(english, hebrew, "nav-home should differ between bundles");

    // Every select builds fresh bundles; isolation must stay off for each.
    let hebrew_dot = ui::t!("services-go-to", number = "2");
    assert_unisolated(&hebrew_dot);
    assert!(hebrew_dot.ends_with(" 2"), "got {hebrew_dot:?}");

    // Selecting the active locale again is a no-op.
    i18n::set_locale(Locale::He).expect("reselect he");
    assert_eq!(i18n::lookup("nav-home"), hebrew);

    i18n::set_locale(Locale::En).expect("back to en");
    assert_eq!(i18n::lookup("nav-home"), english);
    assert_eq!(ui::t!("services-go-to", number = "2"), "Go to service 2");
}

#[test]
fn unsupported_codes_fall_back_to_the_default() {
    let mut store = LocaleStore::from_path("/he", Locale::En);
    assert_eq!(store.current(), Locale::He);
    assert_eq!(store.switch_to("fr"), Locale::En);
    assert_eq!(store.current(), Locale::En);
    assert!(!store.direction().is_rtl());

    assert_eq!(store.switch_to("he"), Locale::He);
    assert!(store.direction().is_rtl());
}
