//! English input tokenization.
//!
//! Splits raw text into words and punctuation. The tokenizer is total: it
//! never fails, and characters it does not recognize become
//! [`TokenKind::Error`] tokens for the parser to report. Word casing is
//! preserved; the parser lowercases for vocabulary lookup.

use folglot_foundation::Span;

use crate::token::{Token, TokenKind};

/// Tokenizes English input.
pub struct Tokenizer;

impl Tokenizer {
    /// Tokenizes a raw input string into tokens ending with [`TokenKind::End`].
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut chars = input.char_indices().peekable();

        while let Some(&(start, c)) = chars.peek() {
            if c.is_whitespace() {
                chars.next();
            } else if c.is_alphanumeric() {
                let mut end = start + c.len_utf8();
                chars.next();
                while let Some(&(offset, d)) = chars.peek() {
                    if d.is_alphanumeric() {
                        end = offset + d.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token::new(
                    TokenKind::Word(input[start..end].to_string()),
                    Span::new(start, end),
                ));
            } else if matches!(c, '.' | ',' | ';' | ':' | '!' | '?' | '(' | ')') {
                chars.next();
                tokens.push(Token::new(
                    TokenKind::Punctuation(c),
                    Span::new(start, start + c.len_utf8()),
                ));
            } else {
                chars.next();
                tokens.push(Token::new(
                    TokenKind::Error(c),
                    Span::new(start, start + c.len_utf8()),
                ));
            }
        }

        tokens.push(Token::new(TokenKind::End, Span::point(input.len())));
        tokens
    }
}
