use thiserror::Error;

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum InputError {
    #[error("invalid size {0:?}: expected a non-negative integer")]
    InvalidSize(String),
    #[error("invalid element {0:?}: expected an integer")]
    InvalidElement(String),
}

pub fn parse_size(text: &str) -> Result<usize, InputError> {
    text.trim()
        .parse::<usize>()
        .map_err(|_| InputError::InvalidSize(text.trim().to_owned()))
}

/// Whitespace-separated integer tokens. Empty input is a valid empty
/// sequence.
pub fn parse_sequence(text: &str) -> Result<Vec<i64>, InputError> {
    text.split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| InputError::InvalidElement(token.to_owned()))
        })
        .collect()
}
