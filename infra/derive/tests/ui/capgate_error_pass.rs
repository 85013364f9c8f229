use capgate_derive::capgate_error;
use std::borrow::Cow;

#[capgate_error]
pub enum DemoError {
    #[error("Unparsable number{}: {source}", format_context(.context))]
    Parse {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Unknown identifier '{value}'")]
    InvalidIdentifier { value: String },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u32, DemoError> {
    raw.parse::<u32>().context("Parsing the control plane count")
}

fn main() {
    let err = parse("three").unwrap_err();
    assert!(err.to_string().contains("(Parsing the control plane count)"));

    let internal: DemoError = "boom".into();
    assert_eq!(internal.to_string(), "Internal error: boom");

    let owned: Result<(), DemoError> = Err(String::from("late").into());
    let with_context = owned.context("step two").unwrap_err();
    assert_eq!(with_context.to_string(), "Internal error (step two): late");

    let plain = DemoError::InvalidIdentifier { value: "FOO".to_owned() };
    assert_eq!(plain.to_string(), "Unknown identifier 'FOO'");
}
