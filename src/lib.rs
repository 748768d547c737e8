//! Folglot - deterministic translation between English and first-order logic.
//!
//! This crate re-exports all layers of the Folglot engine for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: folglot (this crate)  — Translator: the two public entry points
//! Layer 1: folglot_english       — English tokenizer, template parser, renderer
//!          folglot_logic         — FOL lexer, parser, canonical printer
//! Layer 0: folglot_foundation    — Formula AST, vocabulary, spans, errors
//! ```
//!
//! Both surface syntaxes share one semantic representation, the
//! [`Formula`] AST: text flows `raw text → tokens → formula → rendered
//! text` in either direction, with the formula as the pivot.
//!
//! # Example
//!
//! ```
//! use folglot::{translate_fol_to_nl, translate_nl_to_fol};
//!
//! let fol = translate_nl_to_fol("Every human is mortal").unwrap();
//! assert_eq!(fol, "∀x(Human(x) → Mortal(x))");
//!
//! let english = translate_fol_to_nl("∀x(Human(x) → Mortal(x))").unwrap();
//! assert_eq!(english, "for every x, if x is human then x is mortal");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use folglot_english as english;
pub use folglot_foundation as foundation;
pub use folglot_logic as logic;

pub use folglot_foundation::{Error, ErrorKind, Formula, Quantifier, Result, Stage, Term, Vocabulary};

mod translator;
pub use translator::{Translator, translate_fol_to_nl, translate_nl_to_fol};
