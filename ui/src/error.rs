//! Error types for the few operations that can actually fail.
//!
//! Most of the site degrades silently (unknown locale → default, stale index →
//! clamped). Only timer start-up, config parsing and bundle selection surface
//! a `Result`, and callers log and fall back rather than bubble these up to
//! the page.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("rotation interval must be positive (got {0} ms)")]
    ZeroInterval(u64),

    #[error("invalid site configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to select localization bundle: {0}")]
    I18n(#[from] i18n_embed::I18nEmbedError),
}

pub type SiteResult<T> = Result<T, SiteError>;
