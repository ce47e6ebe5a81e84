use folio_kernel::config::ConfigError;
use std::borrow::Cow;

/// A specialized [`ScrollingError`] enum of this crate.
#[folio_derive::folio_error]
pub enum ScrollingError {
    /// `scrollToSection` was called with an id that is not on the page.
    #[error("Target section not found{}: {id}", format_context(.context))]
    SectionNotFound { id: String, context: Option<Cow<'static, str>> },
    /// Rejected `scrolling` configuration.
    #[error("Scrolling config error{}: {source}", format_context(.context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal scrolling error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
