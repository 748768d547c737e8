//! Lexer for FOL notation.
//!
//! Recognizes exactly the symbol set `∀ ∃ ∧ ∨ ¬ → ↔ ( ) ,` plus identifiers
//! (a letter followed by letters or digits). The lexer is total: characters
//! outside the notation become [`TokenKind::Error`] tokens carrying their
//! position, and the parser decides whether to report them.

use folglot_foundation::Span;

use crate::token::{Token, TokenKind};

/// Lexer for FOL notation.
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Current byte offset in source.
    position: usize,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub const fn new(source: &'src str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Returns the next token from the source.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let Some(c) = self.peek_char() else {
            return Token::new(TokenKind::Eof, Span::point(start));
        };

        let kind = match c {
            '∀' => {
                self.advance();
                TokenKind::ForAll
            }
            '∃' => {
                self.advance();
                TokenKind::Exists
            }
            '¬' => {
                self.advance();
                TokenKind::Not
            }
            '∧' => {
                self.advance();
                TokenKind::And
            }
            '∨' => {
                self.advance();
                TokenKind::Or
            }
            '→' => {
                self.advance();
                TokenKind::Implies
            }
            '↔' => {
                self.advance();
                TokenKind::Iff
            }
            '(' => {
                self.advance();
                TokenKind::LParen
            }
            ')' => {
                self.advance();
                TokenKind::RParen
            }
            ',' => {
                self.advance();
                TokenKind::Comma
            }
            c if c.is_alphabetic() => self.scan_identifier(),
            c => {
                self.advance();
                TokenKind::Error(c)
            }
        };

        Token::new(kind, Span::new(start, self.position))
    }

    /// Tokenizes all source and returns a vector of tokens ending with Eof.
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Scans an identifier and classifies it by the naming convention.
    fn scan_identifier(&mut self) -> TokenKind {
        let start = self.position;
        while let Some(c) = self.peek_char() {
            if c.is_alphanumeric() {
                self.advance();
            } else {
                break;
            }
        }
        let text = &self.source[start..self.position];

        let first_is_upper = text.chars().next().is_some_and(char::is_uppercase);
        if first_is_upper {
            TokenKind::Predicate(text.to_string())
        } else if text.chars().count() == 1 {
            TokenKind::Variable(text.to_string())
        } else {
            TokenKind::Constant(text.to_string())
        }
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    /// Consumes the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.position += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }
}
