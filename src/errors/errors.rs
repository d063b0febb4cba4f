use std::fmt::Display;

use thiserror::Error as ErrorDerive;

use crate::{lexer::tokens::TokenKind, Span};

/// A recorded, non-fatal description of a malformed input construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    span: Span,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, span: Span) -> Self {
        Error {
            internal_error: error_impl,
            span,
        }
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::NoPrefixRule { .. } => "NoPrefixRule",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::ExpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "expected next token to be {}, got {} instead",
                expected, found
            )),
            ErrorImpl::NoPrefixRule { token } => ErrorTip::Suggestion(format!(
                "`{}` cannot begin an expression",
                token
            )),
            ErrorImpl::NumberParseError { literal } => ErrorTip::Suggestion(format!(
                "invalid number: `{}`, is it above the integer limit?",
                literal
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(ErrorDerive, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    /// A structural diagnostic: the expected token kind did not appear next.
    #[error("expected next token to be {expected}, got {found} instead")]
    ExpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    /// A token appeared in expression position with no registered prefix rule.
    #[error("no prefix parse function for {token:?} found")]
    NoPrefixRule { token: String },
    /// A digit run that does not fit the integer value type.
    #[error("could not parse {literal:?} as integer")]
    NumberParseError { literal: String },
}
