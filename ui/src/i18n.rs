//! Internationalization (i18n) support for `devco-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/devco-ui.ftl   (fallback/reference)
//!   he-IL/devco-ui.ftl   (right-to-left)
//! ```
//!
//! Literal keys go through `t!` so typos fail the build. Keys that come from
//! the content tables (service titles, skill names) go through [`lookup`],
//! which degrades to the key itself when a message is missing.
//!
//! The site locale comes from the route, not the OS: `init()` only loads the
//! fallback bundle, and the page calls [`set_locale`] with whatever the URL
//! says. [`preferred_locale`] reads the browser/OS list for the `/` redirect.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

use crate::core::locale::Locale;
use crate::error::SiteResult;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-home")
///     t!("services-go-to", number = "2")
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; must agree with `domain` in `i18n.toml`, which `fl!` reads.
const DOMAIN: &str = "devco-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent). Loads the fallback bundle.
pub fn init() {
    INIT.call_once(|| {
        if let Err(err) = select(Locale::En) {
            tracing::warn!("[i18n] failed loading fallback bundle ({err})");
        }
    });
}

/// Load the bundles for `locale`. Isolation is a per-bundle setting and every
/// `select` builds fresh bundles, so it is switched off after each load:
/// Hebrew strings must not pick up FSI/PDI marks around placeables.
fn select(locale: Locale) -> SiteResult<()> {
    i18n_embed::select(&*LOADER, &Localizations, &[locale.language_identifier()])?;
    LOADER.set_use_isolating(false);
    Ok(())
}

/// Make `locale` the active bundle. No-op if it already is.
pub fn set_locale(locale: Locale) -> SiteResult<()> {
    init();
    let wanted = locale.language_identifier();
    if LOADER.current_language() == wanted {
        return Ok(());
    }
    select(locale)?;
    tracing::debug!(locale = %locale, "[i18n] bundle selected");
    Ok(())
}

/// Locale whose bundle is currently active.
pub fn active_locale() -> Locale {
    init();
    Locale::resolve_or(&LOADER.current_language().to_string(), Locale::En)
}

/// Dynamic lookup for data-driven keys. A missing message renders as its key.
pub fn lookup(key: &str) -> String {
    init();
    if LOADER.has(key) {
        LOADER.get(key)
    } else {
        tracing::warn!(key, "[i18n] missing message; rendering key");
        key.to_string()
    }
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// First supported locale in the user's requested languages, else `default`.
pub fn preferred_locale(default: Locale) -> Locale {
    negotiate(&requested_languages(), default)
}

fn negotiate(requested: &[LanguageIdentifier], default: Locale) -> Locale {
    requested
        .iter()
        .find_map(|lang| Locale::parse(lang.language.as_str()))
        .unwrap_or(default)
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fl;

    #[test]
    fn fallback_language_is_present() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "en-US"));
        assert!(langs.iter().any(|l| l == "he-IL"));
    }

    #[test]
    fn basic_lookup_works() {
        init();
        let s = fl!(&*LOADER, "nav-home");
        assert!(!s.is_empty());
    }

    #[test]
    fn missing_key_renders_as_key() {
        assert_eq!(lookup("no-such-message"), "no-such-message");
    }

    #[test]
    fn negotiation_skips_unsupported_languages() {
        let requested: Vec<LanguageIdentifier> = ["fr-FR", "he-IL", "en-US"]
            .iter()
            .map(|tag| tag.parse().unwrap())
            .collect();
        assert_eq!(negotiate(&requested, Locale::En), Locale::He);
        assert_eq!(negotiate(&requested[..1], Locale::En), Locale::En);
        assert_eq!(negotiate(&[], Locale::He), Locale::He);
    }
}
