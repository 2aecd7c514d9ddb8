//! Locale resolution and switching.
//!
//! The active locale lives in the first path segment (`/en`, `/he`). The store
//! never rejects input: anything outside the supported set resolves to the
//! configured default.

use std::fmt;

use once_cell::sync::OnceCell;
use unic_langid::LanguageIdentifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    He,
}

/// Text direction attached to a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::He];

    /// Parse a route segment or short code. Region suffixes are accepted
    /// (`he-IL`, `en_US`), case-insensitively.
    pub fn parse(code: &str) -> Option<Self> {
        let primary = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Self::En),
            "he" | "iw" => Some(Self::He),
            _ => None,
        }
    }

    /// Parse, falling back to `default` for unsupported input.
    pub fn resolve_or(code: &str, default: Locale) -> Self {
        Self::parse(code).unwrap_or(default)
    }

    /// Route segment / short code.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::He => "he",
        }
    }

    /// Fluent bundle folder under `i18n/`.
    pub fn lang_tag(self) -> &'static str {
        match self {
            Self::En => "en-US",
            Self::He => "he-IL",
        }
    }

    /// Open Graph locale (`og:locale`).
    pub fn og_locale(self) -> &'static str {
        match self {
            Self::En => "en_US",
            Self::He => "he_IL",
        }
    }

    /// Label shown on the language switcher. Always in the locale's own script.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::He => "עברית",
        }
    }

    pub fn direction(self) -> TextDirection {
        match self {
            Self::En => TextDirection::Ltr,
            Self::He => TextDirection::Rtl,
        }
    }

    pub fn language_identifier(self) -> LanguageIdentifier {
        self.lang_tag().parse().unwrap_or_default()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Extract the locale segment from a path such as `/he/#services`.
pub fn locale_segment(path: &str) -> Option<&str> {
    path.trim_start_matches('/')
        .split(['/', '#', '?'])
        .next()
        .filter(|segment| !segment.is_empty())
}

/// Current locale plus the default it falls back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleStore {
    current: Locale,
    default: Locale,
}

impl LocaleStore {
    pub fn new(default: Locale) -> Self {
        Self {
            current: default,
            default,
        }
    }

    /// Build the store from a full route path (`/he`, `/en/…`).
    pub fn from_path(path: &str, default: Locale) -> Self {
        let current = locale_segment(path)
            .map(|segment| Locale::resolve_or(segment, default))
            .unwrap_or(default);
        Self { current, default }
    }

    pub fn current(&self) -> Locale {
        self.current
    }

    pub fn default_locale(&self) -> Locale {
        self.default
    }

    pub fn direction(&self) -> TextDirection {
        self.current.direction()
    }

    /// Locale the route segment asks for, if it differs from the current one.
    pub fn route_change(&self, segment: &str) -> Option<Locale> {
        let wanted = Locale::resolve_or(segment, self.default);
        (wanted != self.current).then_some(wanted)
    }

    /// Switch to `code`. Unsupported codes land on the default locale.
    /// Returns the locale now in effect.
    pub fn switch_to(&mut self, code: &str) -> Locale {
        let next = Locale::resolve_or(code, self.default);
        if next != self.current {
            tracing::debug!(from = %self.current, to = %next, "locale switch");
        }
        self.current = next;
        next
    }
}

impl Default for LocaleStore {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

/// Navigation hook registered by the platform crate, which owns the `Route`
/// enum. `ui` only knows how to ask for "the same page in another locale".
pub struct LocaleRouter {
    pub navigate: fn(locale: Locale),
}

static LOCALE_ROUTER: OnceCell<LocaleRouter> = OnceCell::new();

pub fn register_router(router: LocaleRouter) {
    let _ = LOCALE_ROUTER.set(router);
}

/// Ask the platform to re-route to `locale`. Returns `false` when no router
/// has been registered (tests, embedded previews).
pub fn navigate_with_locale(locale: Locale) -> bool {
    match LOCALE_ROUTER.get() {
        Some(router) => {
            (router.navigate)(locale);
            true
        }
        None => false,
    }
}
