//! Shared UI crate for the DevCo portfolio site. State machines, localization
//! and every page section live here; platform crates only supply routing.

pub mod config;
pub mod content;
pub mod core;
pub mod error;
pub mod hooks;
pub mod i18n;
pub mod seo;
pub mod views;

pub mod components {
    // Site header with locale switcher (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;

    mod about;
    mod contact;
    mod experience;
    mod floating_cta;
    mod footer;
    mod hero;
    mod services;
    mod skills;
    mod testimonials;

    pub use about::About;
    pub use contact::Contact;
    pub use experience::ExperienceTimeline;
    pub use floating_cta::FloatingCta;
    pub use footer::Footer;
    pub use hero::Hero;
    pub use services::Services;
    pub use skills::Skills;
    pub use testimonials::Testimonials;
}

pub use crate::core::locale::{register_router, Locale, LocaleRouter};

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
