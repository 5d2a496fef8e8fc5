use std::borrow::Cow;

/// Gallery slice error type.
#[arkiv_derive::arkiv_error]
pub enum GalleryError {
    #[error("Invalid gallery layout{}: {message}", format_context(.context))]
    InvalidLayout { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[error("Gallery error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
