//! Errors.
//!
//! A construct that does not match is not an error: that is `State::Nok`,
//! handled by whichever attempt started it. The variants here are broken
//! invariants in the engine or in a construct, and abort the whole run.

use thiserror::Error;

use crate::code::Code;
use crate::event::{Point, TokenType};

/// Fatal invariant violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    #[error("{point}: cannot exit `{expected}`, innermost open token is `{found}`")]
    ExitMismatch {
        expected: TokenType,
        found: TokenType,
        point: Point,
    },

    #[error("{point}: cannot exit `{expected}`, no token is open")]
    ExitWithoutEnter { expected: TokenType, point: Point },

    #[error("{point}: expected {expected}, found {found}")]
    Unexpected {
        expected: &'static str,
        found: Code,
        point: Point,
    },

    #[error("{point}: cannot consume past the end of input")]
    ConsumeEof { point: Point },

    #[error("{point}: a state consumed more than one code")]
    DoubleConsume { point: Point },

    #[error("{point}: `{kind}` is still open")]
    Unclosed { kind: TokenType, point: Point },

    #[error("{point}: more than {limit} nested attempts")]
    AttemptDepth { limit: usize, point: Point },

    #[error("{point}: tokenizing stopped before the end of input")]
    Incomplete { point: Point },

    #[error("{point}: invalid option `{name}`: {reason}")]
    InvalidOptions {
        name: &'static str,
        reason: &'static str,
        point: Point,
    },
}

impl TokenizeError {
    /// Where the violation was detected.
    pub fn point(&self) -> Point {
        match self {
            Self::ExitMismatch { point, .. }
            | Self::ExitWithoutEnter { point, .. }
            | Self::Unexpected { point, .. }
            | Self::ConsumeEof { point }
            | Self::DoubleConsume { point }
            | Self::Unclosed { point, .. }
            | Self::AttemptDepth { point, .. }
            | Self::Incomplete { point }
            | Self::InvalidOptions { point, .. } => *point,
        }
    }
}

impl From<ConfigError> for TokenizeError {
    fn from(error: ConfigError) -> Self {
        let (name, reason) = match error {
            ConfigError::Invalid { name, reason } => (name, reason),
            ConfigError::Parse(_) => ("options", "could not be parsed"),
        };
        TokenizeError::InvalidOptions {
            name,
            reason,
            point: Point::START,
        }
    }
}

/// Invalid configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid options file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid option `{name}`: {reason}")]
    Invalid {
        name: &'static str,
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let point = Point { line: 2, column: 5, offset: 9, index: 9 };
        let error = TokenizeError::ExitMismatch {
            expected: TokenType::Paragraph,
            found: TokenType::Data,
            point,
        };
        assert_eq!(
            error.to_string(),
            "2:5: cannot exit `paragraph`, innermost open token is `data`"
        );
        assert_eq!(error.point(), point);

        let error = TokenizeError::Unexpected {
            expected: "end of line or end of input",
            found: Code::Char('x'),
            point,
        };
        assert_eq!(error.to_string(), "2:5: expected end of line or end of input, found `x`");
    }
}
