use folio_kernel::config::ConfigError;
use std::borrow::Cow;

/// A specialized [`AnimationError`] enum of this crate.
#[folio_derive::folio_error]
pub enum AnimationError {
    /// Rejected `animation` configuration.
    #[error("Animation config error{}: {source}", format_context(.context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal animation error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
