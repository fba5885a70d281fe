pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid direction: {input:?} (expected one of up, down, left, right)")]
pub struct ParseDirectionError {
    #[error(not(source))]
    input: String,
}

impl ParseDirectionError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseTileSeedError {
    #[display("invalid hex: expected 32 characters, got {_0}")]
    InvalidLength(#[error(not(source))] usize),
    #[display("invalid hex: {_0}")]
    InvalidDigit(#[error(not(source))] String),
}
