use thiserror::Error;

use crate::analyzer::core::ParseError;
use crate::tokenizer::token::TokenizerError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Tokenizer error: {0}")]
    Tokenize(#[from] TokenizerError),
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

pub type DescentResult<T> = Result<T, Error>;

impl Error {
    /// True when the grammar or pattern set is at fault rather than the input.
    pub fn is_configuration(&self) -> bool {
        match self {
            Error::Tokenize(TokenizerError::UnknownSpan { .. }) => false,
            Error::Tokenize(_) => true,
            Error::Parse(e) => e.is_configuration(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_classification() {
        let unknown: Error = TokenizerError::UnknownSpan {
            text: "@".to_string(),
            position: 0,
        }
        .into();
        assert!(!unknown.is_configuration());

        let empty: Error = TokenizerError::EmptyMatch {
            name: "digits".to_string(),
            position: 0,
        }
        .into();
        assert!(empty.is_configuration());

        let stalled: Error = ParseError::NoProgress { cursor: 2 }.into();
        assert!(stalled.is_configuration());
    }
}
