use thiserror::Error;

use crate::{
    token::TokenError,
    userid::InvalidLengthError
};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    InvalidLength(#[from] InvalidLengthError),
    #[error("token subject must not be empty")]
    EmptySubject,
    #[error(transparent)]
    Token(#[from] TokenError)
}
