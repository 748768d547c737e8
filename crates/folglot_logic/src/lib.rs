//! Lexer, parser, and canonical printer for first-order logic notation.
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of FOL notation (`∀ ∃ ∧ ∨ ¬ → ↔ ( ) ,` plus identifiers)
//! - [`Parser`] / [`parse`] - Parsing tokens into a [`folglot_foundation::Formula`]
//! - [`print`] - Deterministic, parenthesization-minimal rendering
//!
//! The parser accepts exactly the notation the printer produces, so printing
//! and reparsing a formula reproduces it structurally.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod lexer;
pub mod parser;
pub mod printer;
pub mod token;


pub use lexer::Lexer;
pub use parser::{Parser, parse};
pub use printer::print;
pub use token::{Token, TokenKind};
