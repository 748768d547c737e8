//! Parser for FOL notation.
//!
//! Recursive descent with the conventional precedence, tightest first:
//! quantifier scope (a quantifier binds the smallest well-parenthesized
//! formula immediately following it), then `¬`, `∧`, `∨`, `→`, `↔`.
//! Conjunction and disjunction are left-associative; implication and
//! biconditional are right-associative. Explicit parentheses override.
//!
//! The parser enforces the AST invariants as it goes: every variable must be
//! bound by an enclosing quantifier, every predicate and constant symbol must
//! be in the vocabulary, and applied arity must match the declared arity.

use folglot_foundation::{Error, Formula, Quantifier, Result, Term, Vocabulary};

use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// Parses FOL notation into a formula.
///
/// # Errors
/// Returns an error if the notation is malformed, uses symbols outside the
/// vocabulary, applies a predicate at the wrong arity, or leaves a variable
/// unbound.
pub fn parse(source: &str, vocabulary: &Vocabulary) -> Result<Formula> {
    Parser::new(source, vocabulary).parse()
}

/// Parser state for a single source string.
pub struct Parser<'voc> {
    vocabulary: &'voc Vocabulary,
    tokens: Vec<Token>,
    position: usize,
    /// Variables bound by enclosing quantifiers, innermost last.
    bound: Vec<String>,
}

impl<'voc> Parser<'voc> {
    /// Creates a parser over the given source.
    #[must_use]
    pub fn new(source: &str, vocabulary: &'voc Vocabulary) -> Self {
        Self {
            vocabulary,
            tokens: Lexer::tokenize_all(source),
            position: 0,
            bound: Vec::new(),
        }
    }

    /// Parses a complete formula, requiring all input to be consumed.
    ///
    /// # Errors
    /// Returns an error if the source cannot be parsed.
    pub fn parse(&mut self) -> Result<Formula> {
        let formula = self.parse_formula()?;
        if self.current().kind == TokenKind::Eof {
            Ok(formula)
        } else {
            Err(self.error_expected("end of input"))
        }
    }

    fn parse_formula(&mut self) -> Result<Formula> {
        self.parse_iff()
    }

    /// `↔`: loosest, right-associative.
    fn parse_iff(&mut self) -> Result<Formula> {
        let left = self.parse_implies()?;
        if self.current().kind == TokenKind::Iff {
            self.advance();
            let right = self.parse_iff()?;
            Ok(Formula::iff(left, right))
        } else {
            Ok(left)
        }
    }

    /// `→`: right-associative.
    fn parse_implies(&mut self) -> Result<Formula> {
        let left = self.parse_or()?;
        if self.current().kind == TokenKind::Implies {
            self.advance();
            let right = self.parse_implies()?;
            Ok(Formula::implies(left, right))
        } else {
            Ok(left)
        }
    }

    /// `∨`: left-associative.
    fn parse_or(&mut self) -> Result<Formula> {
        let mut left = self.parse_and()?;
        while self.current().kind == TokenKind::Or {
            self.advance();
            let right = self.parse_and()?;
            left = Formula::or(left, right);
        }
        Ok(left)
    }

    /// `∧`: left-associative.
    fn parse_and(&mut self) -> Result<Formula> {
        let mut left = self.parse_unary()?;
        while self.current().kind == TokenKind::And {
            self.advance();
            let right = self.parse_unary()?;
            left = Formula::and(left, right);
        }
        Ok(left)
    }

    /// Negation, quantifiers, parenthesized formulas, and atoms.
    fn parse_unary(&mut self) -> Result<Formula> {
        match &self.current().kind {
            TokenKind::Not => {
                self.advance();
                Ok(Formula::not(self.parse_unary()?))
            }
            TokenKind::ForAll => self.parse_quantified(Quantifier::Universal),
            TokenKind::Exists => self.parse_quantified(Quantifier::Existential),
            TokenKind::LParen => {
                self.advance();
                let formula = self.parse_formula()?;
                self.expect(&TokenKind::RParen)?;
                Ok(formula)
            }
            TokenKind::Predicate(_) => self.parse_atom(),
            _ => Err(self.error_expected("a formula")),
        }
    }

    /// A quantifier binds the smallest well-parenthesized formula after it.
    fn parse_quantified(&mut self, quantifier: Quantifier) -> Result<Formula> {
        self.advance();

        let TokenKind::Variable(variable) = &self.current().kind else {
            return Err(self.error_expected("a variable"));
        };
        let variable = variable.clone();
        self.advance();

        self.bound.push(variable.clone());
        let body = self.parse_unary();
        self.bound.pop();

        Ok(Formula::Quantified {
            quantifier,
            variable,
            body: Box::new(body?),
        })
    }

    /// An atomic predicate application: `Name(term, ...)`.
    fn parse_atom(&mut self) -> Result<Formula> {
        let name_span = self.current().span;
        let TokenKind::Predicate(name) = &self.current().kind else {
            return Err(self.error_expected("a predicate name"));
        };
        let name = name.clone();
        self.advance();

        let Some(entry) = self.vocabulary.lookup_symbol(&name) else {
            return Err(Error::unknown_symbol(&name).with_span(name_span));
        };
        let declared = entry.arity;

        self.expect(&TokenKind::LParen)?;
        let mut args = Vec::new();
        loop {
            args.push(self.parse_term()?);
            if self.current().kind == TokenKind::Comma {
                self.advance();
            } else {
                break;
            }
        }
        let close_span = self.current().span;
        self.expect(&TokenKind::RParen)?;

        if args.len() != declared {
            return Err(Error::arity_mismatch(&name, declared, args.len())
                .with_span(name_span.to(close_span)));
        }

        Ok(Formula::predicate(name, args))
    }

    /// A term: a bound variable or a known constant.
    fn parse_term(&mut self) -> Result<Term> {
        let span = self.current().span;
        match &self.current().kind {
            TokenKind::Variable(name) => {
                let name = name.clone();
                if !self.bound.contains(&name) {
                    return Err(Error::unbound_variable(&name).with_span(span));
                }
                self.advance();
                Ok(Term::Variable(name))
            }
            TokenKind::Constant(name) => {
                let name = name.clone();
                if !self.vocabulary.has_constant_symbol(&name) {
                    return Err(Error::unknown_symbol(&name).with_span(span));
                }
                self.advance();
                Ok(Term::Constant(name))
            }
            _ => Err(self.error_expected("a term")),
        }
    }

    fn current(&self) -> &Token {
        &self.tokens[self.position]
    }

    fn advance(&mut self) {
        if self.position < self.tokens.len() - 1 {
            self.position += 1;
        }
    }

    fn expect(&mut self, expected: &TokenKind) -> Result<()> {
        if self.current().kind == *expected {
            self.advance();
            Ok(())
        } else {
            Err(self.error_expected(expected.name()))
        }
    }

    /// Builds an error describing what was found where something else was
    /// expected. Error tokens surface as the lexical error they carry.
    fn error_expected(&self, expected: &str) -> Error {
        let token = self.current();
        match &token.kind {
            TokenKind::Eof => Error::unexpected_end(expected).with_span(token.span),
            TokenKind::Error(c) => Error::unexpected_character(*c).with_span(token.span),
            kind => Error::unexpected_token(kind.name(), expected).with_span(token.span),
        }
    }
}
