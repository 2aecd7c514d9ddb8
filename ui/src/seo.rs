//! Per-locale page metadata and JSON-LD structured data.

use serde::Serialize;
use serde_json::json;

use crate::config::SiteConfig;
use crate::core::locale::Locale;

pub const SITE_NAME: &str = "Sivan Wolberg Portfolio";
pub const AUTHOR: &str = "Sivan Wolberg";

pub const KEYWORDS: [&str; 11] = [
    "Full Stack Developer",
    "AI Developer",
    "React",
    "Node.js",
    "Python",
    "LangChain",
    "Claude Code",
    "Cursor",
    "Freelancer",
    "Haifa",
    "Israel",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alternate {
    pub hreflang: &'static str,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub alternates: Vec<Alternate>,
    pub og_locale: &'static str,
    pub keywords: String,
}

impl PageMeta {
    pub fn new(config: &SiteConfig, locale: Locale, title: String, description: String) -> Self {
        let alternates = Locale::ALL
            .iter()
            .map(|alt| Alternate {
                hreflang: alt.code(),
                href: config.locale_url(*alt),
            })
            .collect();

        Self {
            title,
            description,
            canonical: config.locale_url(locale),
            alternates,
            og_locale: locale.og_locale(),
            keywords: KEYWORDS.join(", "),
        }
    }
}

/// schema.org `Person` describing the site owner.
pub fn structured_data(config: &SiteConfig) -> serde_json::Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": AUTHOR,
        "jobTitle": "Full Stack & AI Developer",
        "description": "15+ Years Full-Stack & AI Developer specializing in React, Node.js, Python, and LangChain",
        "url": config.site_url,
        "email": config.contact.email,
        "address": {
            "@type": "PostalAddress",
            "addressLocality": "Haifa",
            "addressCountry": "Israel",
        },
        "sameAs": [config.contact.linkedin, config.contact.upwork],
        "knowsAbout": [
            "Full Stack Development",
            "AI Development",
            "React",
            "Node.js",
            "Python",
            "LangChain",
            "Next.js",
            "NestJS",
            "TypeScript",
            "Claude Code",
            "Cursor AI",
        ],
    })
}

/// JSON-LD body safe to inline inside a `<script>` element.
pub fn structured_data_script(config: &SiteConfig) -> String {
    structured_data(config).to_string().replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_lists_every_locale_as_alternate() {
        let config = SiteConfig::default();
        let meta = PageMeta::new(&config, Locale::He, "t".into(), "d".into());
        assert_eq!(meta.canonical, "https://www.devco-solution.online/he");
        assert_eq!(meta.og_locale, "he_IL");
        let langs: Vec<_> = meta.alternates.iter().map(|alt| alt.hreflang).collect();
        assert_eq!(langs, vec!["en", "he"]);
    }

    #[test]
    fn structured_data_is_a_person_with_profiles() {
        let config = SiteConfig::default();
        let data = structured_data(&config);
        assert_eq!(data["@type"], "Person");
        assert_eq!(data["email"], "fastwings@gmail.com");
        assert_eq!(data["sameAs"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn script_body_cannot_close_the_tag() {
        let mut config = SiteConfig::default();
        config.site_url = "https://x.test/</script>".into();
        assert!(!structured_data_script(&config).contains("</script>"));
    }
}
