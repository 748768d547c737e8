//! Tokenizer, template grammar parser, and sentence renderer for English
//! statements.
//!
//! This crate provides:
//! - [`Tokenizer`] - Splitting raw text into word and punctuation tokens
//! - [`Parser`] / [`parse`] - Matching the fixed sentence templates into a
//!   [`folglot_foundation::Formula`]
//! - [`render`] - Rendering a formula back into an English sentence
//!
//! The renderer emits only sentences the parser accepts, which is what makes
//! translations stable under a render/reparse cycle.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod parser;
pub mod renderer;
pub mod token;
pub mod tokenizer;

pub use parser::{Parser, parse};
pub use renderer::{Renderer, render};
pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;
