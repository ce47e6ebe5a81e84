use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

static EMAIL: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN));

/// Why a field was rejected. `Display` is the message shown under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Name must be at least 2 characters long")]
    NameTooShort,
    #[error("Subject must be at least 3 characters long")]
    SubjectTooShort,
    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}

/// The attributes of a form control that select which rules apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldSpec<'a> {
    pub required: bool,
    /// The `type` attribute.
    pub kind: Option<&'a str>,
    /// The `name` attribute.
    pub name: Option<&'a str>,
}

impl<'a> FieldSpec<'a> {
    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use]
    pub const fn kind(mut self, kind: &'a str) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub const fn name(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }
}

/// Checks `raw` against the rules selected by `field`. The value is trimmed first and the first
/// failing rule wins. Lengths are UTF-16 code units, as the browser reports them.
///
/// # Errors
/// Returns the [`ValidationError`] of the first rule the value breaks.
pub fn validate(field: &FieldSpec<'_>, raw: &str) -> Result<(), ValidationError> {
    let value = raw.trim();

    if value.is_empty() {
        return if field.required { Err(ValidationError::Required) } else { Ok(()) };
    }

    if field.kind == Some("email") && !is_valid_email(value) {
        return Err(ValidationError::InvalidEmail);
    }

    let length = value.encode_utf16().count();
    match field.name {
        Some("name") if length < 2 => Err(ValidationError::NameTooShort),
        Some("subject") if length < 3 => Err(ValidationError::SubjectTooShort),
        Some("message") if length < 10 => Err(ValidationError::MessageTooShort),
        _ => Ok(()),
    }
}

/// Permissive address check: local part, `@`, dotted domain, alphabetic TLD of two or more.
pub fn is_valid_email(value: &str) -> bool {
    match &*EMAIL {
        Ok(pattern) => pattern.is_match(value),
        Err(err) => {
            tracing::error!(%err, "Email pattern failed to compile, accepting input");
            true
        },
    }
}
