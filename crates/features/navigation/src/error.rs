use folio_kernel::config::ConfigError;
use std::borrow::Cow;

/// A specialized [`NavigationError`] enum of this crate.
#[folio_derive::folio_error]
pub enum NavigationError {
    /// Rejected `navigation` configuration.
    #[error("Navigation config error{}: {source}", format_context(.context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal navigation error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
