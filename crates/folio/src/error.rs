use folio_kernel::config::ConfigError;
use std::borrow::Cow;

/// Any failure surfaced by the facade.
#[folio_derive::folio_error]
pub enum FolioError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },

    #[cfg(feature = "navigation")]
    #[error("Navigation error{}: {source}", format_context(.context))]
    Navigation { source: folio_navigation::NavigationError, context: Option<Cow<'static, str>> },

    #[cfg(feature = "animation")]
    #[error("Animation error{}: {source}", format_context(.context))]
    Animation { source: folio_animation::AnimationError, context: Option<Cow<'static, str>> },

    #[cfg(feature = "scrolling")]
    #[error("Scrolling error{}: {source}", format_context(.context))]
    Scrolling { source: folio_scrolling::ScrollingError, context: Option<Cow<'static, str>> },

    #[cfg(feature = "contact")]
    #[error("Contact error{}: {source}", format_context(.context))]
    Contact { source: folio_contact::ContactError, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
