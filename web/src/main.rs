use dioxus::logger::tracing::{self, Level};
use dioxus::prelude::*;

use ui::config;
use ui::i18n;
use ui::views::Home;
use ui::{register_router, Locale, LocaleRouter};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/:locale")]
    LocaleHome { locale: String },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

/// Same page, other language. Registered with `ui` so the navbar switcher can
/// move the URL without knowing this crate's `Route` enum.
fn navigate_to_locale(locale: Locale) {
    let target = Route::LocaleHome {
        locale: locale.code().to_string(),
    };
    if let Some(failure) = navigator().replace(target) {
        tracing::warn!(%locale, "locale navigation failed: {failure:?}");
    }
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        i18n::init();
        register_router(LocaleRouter {
            navigate: navigate_to_locale,
        });
    }

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }

        Router::<Route> {}
    }
}

/// `/` carries no locale: send the visitor to their preferred one.
#[component]
fn Root() -> Element {
    let nav = navigator();
    use_effect(move || {
        let locale = i18n::preferred_locale(config::site().default_locale());
        tracing::info!(%locale, "redirecting root to locale home");
        nav.replace(Route::LocaleHome {
            locale: locale.code().to_string(),
        });
    });

    rsx! {}
}

#[component]
fn LocaleHome(locale: String) -> Element {
    rsx! {
        Home { locale }
    }
}
