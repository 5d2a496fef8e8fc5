use arkiv_derive::arkiv_error;
use std::borrow::Cow;

#[arkiv_error]
pub enum TrackError {
    #[error("Measurement unavailable{}: {message}", format_context(.context))]
    Unmeasured { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn unmeasured() -> Result<(), TrackError> {
    Err("card 3 not mounted".into())
}

fn main() {
    let err = unmeasured().context("centering").unwrap_err();
    assert!(matches!(err, TrackError::Internal { .. }));
}
