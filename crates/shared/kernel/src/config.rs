use crate::page::Page;
use folio_domain::constants::ids;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use tracing::{debug, info};

/// Custom error type for config loading.
#[folio_derive::folio_error]
pub enum ConfigError {
    #[error("Config parse error{}: {source}", format_context(.context))]
    Parse { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Invalid config value{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Loads configuration embedded in the page as
/// `<script type="application/json" id="folio-config">`.
///
/// A missing or blank script yields `T::default()`, so pages without any configuration keep the
/// built-in behavior. Partial documents work when `T` uses `#[serde(default)]`.
///
/// # Errors
/// Returns [`ConfigError::Parse`] when the script content is not valid JSON for `T`.
///
/// # Example
/// ```rust,ignore
/// use folio_kernel::config::load_config;
/// use folio_kernel::domain::config::SiteConfig;
///
/// let cfg: SiteConfig = load_config(page.as_ref()).unwrap_or_default();
/// ```
pub fn load_config<T, P>(page: &P) -> Result<T, ConfigError>
where
    T: DeserializeOwned + Default,
    P: Page + ?Sized,
{
    let Some(script) = page.element_by_id(ids::CONFIG_SCRIPT) else {
        debug!("No embedded config, using defaults");
        return Ok(T::default());
    };

    let raw = page.text(&script);
    if raw.trim().is_empty() {
        return Ok(T::default());
    }

    info!("Loading config from #{}", ids::CONFIG_SCRIPT);
    parse_config(&raw)
}

/// Parses a JSON config document.
///
/// # Errors
/// Returns [`ConfigError::Parse`] on malformed input.
pub fn parse_config<T: DeserializeOwned>(raw: &str) -> Result<T, ConfigError> {
    serde_json::from_str(raw).context("Failed to deserialize embedded config")
}

/// Rejects zero durations for handlers that rely on a real time window.
///
/// # Errors
/// Returns [`ConfigError::Invalid`] naming the offending key.
pub fn require_positive_ms(key: &'static str, value: u64) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::Invalid {
            message: format!("{key} must be greater than zero").into(),
            context: None,
        });
    }
    Ok(())
}
