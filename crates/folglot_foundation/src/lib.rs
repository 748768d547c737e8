//! Formula AST, vocabulary, spans, and error types for Folglot.
//!
//! This crate provides:
//! - [`Formula`] - The shared semantic representation for both surface syntaxes
//! - [`Term`] - Variables and constants appearing as predicate arguments
//! - [`Vocabulary`] - The controlled mapping between English words and logical symbols
//! - [`Span`] - Byte ranges for error reporting
//! - [`Error`] - Rich error types with a stage and position

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod formula;
pub mod span;
pub mod vocabulary;

pub use error::{Error, ErrorKind, Result, Stage};
pub use formula::{Formula, Quantifier, Term};
pub use span::Span;
pub use vocabulary::{ConnectiveWord, PredicateEntry, QuantifierWord, Vocabulary};
