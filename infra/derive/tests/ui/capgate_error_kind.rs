use std::borrow::Cow;

#[capgate_derive::capgate_error]
pub enum LookupError {
    #[error("Missing entry '{key}'")]
    Missing { key: String },

    #[error("Internal lookup error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let missing = LookupError::Missing { key: "SNO".to_owned() };
    assert_eq!(missing.kind(), "Missing");

    let internal = LookupError::from("broken registry");
    assert_eq!(internal.kind(), "Internal");
}
