use folio_kernel::config::ConfigError;
use std::borrow::Cow;

/// A specialized [`ContactError`] enum of this crate.
///
/// Field validation never surfaces here; it is rendered inline next to the field.
#[folio_derive::folio_error]
pub enum ContactError {
    /// Rejected `contact` configuration.
    #[error("Contact config error{}: {source}", format_context(.context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal contact error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
