//! High-level translation entry points.
//!
//! The translator composes the two surface pipelines around the shared
//! formula representation:
//!
//! - natural language → formula → canonical FOL notation
//! - FOL notation → formula → English sentence
//!
//! Both directions are pure: they either return the rendered text or fail
//! with a single [`Error`] carrying the stage and, where known, the
//! position. Partial output is never returned. A `Translator` holds only
//! the read-only vocabulary, so one instance can serve any number of
//! concurrent callers.

use folglot_foundation::{Error, Result, Vocabulary};

/// A bidirectional translator over a fixed vocabulary.
#[derive(Clone, Debug)]
pub struct Translator {
    vocabulary: Vocabulary,
}

impl Translator {
    /// Creates a translator with the given vocabulary.
    #[must_use]
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Creates a translator with the stock vocabulary.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Vocabulary::standard())
    }

    /// Returns the vocabulary this translator resolves words against.
    #[must_use]
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Translates an English statement into canonical FOL notation.
    ///
    /// # Errors
    /// Returns an error if the statement is empty, does not match the
    /// sentence grammar, or uses words outside the vocabulary.
    pub fn nl_to_fol(&self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Err(Error::empty_input());
        }
        let formula = folglot_english::parse(text, &self.vocabulary)?;
        Ok(folglot_logic::print(&formula))
    }

    /// Translates FOL notation into an English sentence.
    ///
    /// # Errors
    /// Returns an error if the notation is empty, malformed, or uses
    /// symbols outside the vocabulary.
    pub fn fol_to_nl(&self, text: &str) -> Result<String> {
        if text.trim().is_empty() {
            return Err(Error::empty_input());
        }
        let formula = folglot_logic::parse(text, &self.vocabulary)?;
        folglot_english::render(&formula, &self.vocabulary)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::standard()
    }
}

/// Translates an English statement into FOL using the stock vocabulary.
///
/// # Errors
/// See [`Translator::nl_to_fol`].
pub fn translate_nl_to_fol(text: &str) -> Result<String> {
    Translator::standard().nl_to_fol(text)
}

/// Translates FOL notation into English using the stock vocabulary.
///
/// # Errors
/// See [`Translator::fol_to_nl`].
pub fn translate_fol_to_nl(text: &str) -> Result<String> {
    Translator::standard().fol_to_nl(text)
}
