use dioxus::prelude::*;

use crate::components::{
    About, AppNavbar, Contact, ExperienceTimeline, FloatingCta, Footer, Hero, Services, Skills,
    Testimonials,
};
use crate::config;
use crate::hooks::use_page_locale;
use crate::seo::{self, PageMeta};
use crate::t;

const MAIN_CSS: Asset = asset!("/assets/theme/main.css");

/// The whole single-page site for the locale in the route segment.
///
/// Unsupported segments render the default locale rather than a 404.
#[component]
pub fn Home(locale: String) -> Element {
    let store = use_page_locale(&locale);
    let current = store.read().current();
    let site = config::site();

    tracing::debug!(segment = %locale, resolved = %current, "[i18n] Home render");

    let meta = PageMeta::new(site, current, t!("meta-title"), t!("meta-description"));
    let PageMeta {
        title,
        description,
        canonical,
        alternates,
        og_locale,
        keywords,
    } = meta;
    let alternates: Vec<(&'static str, String)> = alternates
        .into_iter()
        .map(|alt| (alt.hreflang, alt.href))
        .collect();
    let json_ld = seo::structured_data_script(site);
    let site_name = seo::SITE_NAME;
    let author = seo::AUTHOR;
    let dir = current.direction().as_str();
    let lang = current.code();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "{title}" }
        document::Meta { name: "description", content: "{description}" }
        document::Meta { name: "keywords", content: "{keywords}" }
        document::Meta { name: "author", content: "{author}" }
        document::Meta { name: "robots", content: "index, follow" }
        document::Meta { property: "og:title", content: "{title}" }
        document::Meta { property: "og:description", content: "{description}" }
        document::Meta { property: "og:site_name", content: "{site_name}" }
        document::Meta { property: "og:locale", content: "{og_locale}" }
        document::Meta { property: "og:type", content: "website" }
        document::Meta { name: "twitter:card", content: "summary_large_image" }
        document::Link { rel: "canonical", href: "{canonical}" }
        for (hreflang, href) in alternates {
            document::Link { key: "{hreflang}", rel: "alternate", hreflang: "{hreflang}", href: "{href}" }
        }

        div { class: "site", dir: "{dir}", lang: "{lang}",
            script { r#type: "application/ld+json", dangerous_inner_html: "{json_ld}" }

            AppNavbar {}
            FloatingCta {}
            main { class: "site__main",
                Hero {}
                About {}
                Services {}
                Skills {}
                Testimonials {}
                ExperienceTimeline {}
                Contact {}
            }
            Footer {}
        }
    }
}
