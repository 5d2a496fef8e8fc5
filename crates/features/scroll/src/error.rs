use std::borrow::Cow;

/// Scroll slice error type.
#[arkiv_derive::arkiv_error]
pub enum ScrollError {
    #[error("Invalid scroll tuning{}: {message}", format_context(.context))]
    InvalidTuning { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[error("Scroll error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
