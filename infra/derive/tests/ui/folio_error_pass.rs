use folio_derive::folio_error;
use std::borrow::Cow;

#[folio_error]
pub enum DemoError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<i32, DemoError> {
    raw.parse::<i32>().context("parsing delay")
}

fn main() {
    assert!(parse("12").is_ok());
    let err = parse("x").unwrap_err();
    assert!(err.to_string().starts_with("Parse error (parsing delay):"));

    let internal: DemoError = "boom".into();
    assert_eq!(internal.to_string(), "Internal error: boom");

    let with_context: Result<(), DemoError> = Err(DemoError::from(String::from("late")));
    let err = with_context.context("mounting").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (mounting): late");
}
