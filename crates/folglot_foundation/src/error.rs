//! Error types for the translation pipeline.
//!
//! Uses `thiserror` for ergonomic error definition. Tokenizers never raise:
//! lexical problems travel as error tokens and the parsers are the first
//! layer to convert them into an [`Error`]. Renderers only fail when an AST
//! invariant has been violated, which indicates an engine defect rather than
//! bad user input.

use thiserror::Error;

use crate::span::Span;

/// Result alias used throughout Folglot.
pub type Result<T> = std::result::Result<T, Error>;

/// The pipeline stage an error originated from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Splitting raw text into tokens.
    Tokenize,
    /// Matching tokens against the grammar and checking bindings.
    Parse,
    /// Producing surface text from a formula.
    Render,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tokenize => write!(f, "tokenize"),
            Self::Parse => write!(f, "parse"),
            Self::Render => write!(f, "render"),
        }
    }
}

/// The main error type for translation operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Where in the input the error occurred, when known.
    pub span: Option<Span>,
}

impl Error {
    /// Creates a new error with the given kind and no position.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, span: None }
    }

    /// Attaches a source position to this error.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Returns the pipeline stage this error originated from.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.kind.stage()
    }

    /// Creates an empty-input error.
    #[must_use]
    pub fn empty_input() -> Self {
        Self::new(ErrorKind::EmptyInput)
    }

    /// Creates an unexpected-character error.
    #[must_use]
    pub fn unexpected_character(character: char) -> Self {
        Self::new(ErrorKind::UnexpectedCharacter(character))
    }

    /// Creates an unexpected-token error.
    #[must_use]
    pub fn unexpected_token(found: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnexpectedToken {
            found: found.into(),
            expected: expected.into(),
        })
    }

    /// Creates an unexpected-end-of-input error.
    #[must_use]
    pub fn unexpected_end(expected: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnexpectedEnd {
            expected: expected.into(),
        })
    }

    /// Creates an unknown-word error for an English word.
    #[must_use]
    pub fn unknown_word(word: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownWord(word.into()))
    }

    /// Creates an unknown-symbol error for a logical identifier.
    #[must_use]
    pub fn unknown_symbol(symbol: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownSymbol(symbol.into()))
    }

    /// Creates an unbound-variable error.
    #[must_use]
    pub fn unbound_variable(variable: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnboundVariable(variable.into()))
    }

    /// Creates an arity mismatch error.
    #[must_use]
    pub fn arity_mismatch(predicate: impl Into<String>, declared: usize, applied: usize) -> Self {
        Self::new(ErrorKind::ArityMismatch {
            predicate: predicate.into(),
            declared,
            applied,
        })
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Input was empty or all whitespace.
    #[error("input is empty")]
    EmptyInput,

    /// A character the tokenizer does not recognize.
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),

    /// A token that does not fit any grammar production.
    #[error("unexpected {found}, expected {expected}")]
    UnexpectedToken {
        /// Human-readable name of the token found.
        found: String,
        /// Description of the construct that was expected.
        expected: String,
    },

    /// Input ended while a construct was still open.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd {
        /// Description of the construct that was expected.
        expected: String,
    },

    /// An English word absent from the vocabulary.
    #[error("unknown word: {0}")]
    UnknownWord(String),

    /// A predicate or constant symbol absent from the vocabulary.
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),

    /// A variable used outside any quantifier binding it.
    #[error("unbound variable: {0}")]
    UnboundVariable(String),

    /// A predicate applied to the wrong number of arguments.
    #[error("arity mismatch: {predicate} takes {declared} argument(s), applied to {applied}")]
    ArityMismatch {
        /// The predicate symbol.
        predicate: String,
        /// Arity declared in the vocabulary.
        declared: usize,
        /// Number of arguments actually applied.
        applied: usize,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ErrorKind {
    /// Returns the pipeline stage this kind of error originates from.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::UnexpectedCharacter(_) => Stage::Tokenize,
            Self::EmptyInput
            | Self::UnexpectedToken { .. }
            | Self::UnexpectedEnd { .. }
            | Self::UnknownWord(_)
            | Self::UnknownSymbol(_)
            | Self::UnboundVariable(_)
            | Self::ArityMismatch { .. } => Stage::Parse,
            Self::Internal(_) => Stage::Render,
        }
    }
}
