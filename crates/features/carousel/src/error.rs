use std::borrow::Cow;

/// Carousel slice error type.
#[arkiv_derive::arkiv_error]
pub enum CarouselError {
    #[error("Centering failed{}: {message}", format_context(.context))]
    CenteringFailed { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[error("Carousel error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
