//! Parser for English statements.
//!
//! The grammar is a closed set of sentence templates, matched left to right
//! without backtracking or guessing:
//!
//! - `Every/All/Each <noun> is [not] [a/an] <predicate>`: universal
//! - `Some/A/An <noun> is [not] [a/an] <predicate>`: existential
//! - `No <noun> is <predicate>`: negated existential
//! - `for every x, <statement>` / `there exists x such that <statement>`:
//!   quantifiers with an explicit bound variable scoping over a statement
//! - `<subject> is [not] [a/an] <predicate>` and
//!   `<subject> <verb> <object>`: copula and verb clauses over constants
//!   and bound variables
//! - `not` / `it is not the case that`: negation
//! - `and`, `or`, `if ... then ...`, `implies`, `if and only if`:
//!   connectives, conjunction binding tightest, then disjunction,
//!   implication, biconditional
//!
//! Every content word must resolve through the vocabulary; an unresolved
//! word is a semantic error naming the word and its position. Variables must
//! be bound by an enclosing quantifier clause.

use folglot_foundation::{
    ConnectiveWord, Error, Formula, PredicateEntry, QuantifierWord, Result, Term, Vocabulary,
};

use crate::token::{Token, TokenKind};
use crate::tokenizer::Tokenizer;

/// Words the grammar accepts as variables.
const VARIABLE_WORDS: [&str; 6] = ["x", "y", "z", "w", "v", "u"];

/// The negation phrase recognized at statement level.
const NEGATION_PHRASE: &str = "it is not the case that";
const NEGATION_PHRASE_WORDS: usize = 6;

/// Parses an English statement into a formula.
///
/// # Errors
/// Returns an error if the statement does not match any supported sentence
/// template, uses a word outside the vocabulary, or leaves a variable
/// unbound.
pub fn parse(source: &str, vocabulary: &Vocabulary) -> Result<Formula> {
    Parser::new(source, vocabulary).parse()
}

/// Parser state for a single statement.
pub struct Parser<'voc> {
    vocabulary: &'voc Vocabulary,
    tokens: Vec<Token>,
    position: usize,
    /// Variables bound by enclosing quantifier clauses, innermost last.
    bound: Vec<String>,
}

impl<'voc> Parser<'voc> {
    /// Creates a parser over the given statement.
    #[must_use]
    pub fn new(source: &str, vocabulary: &'voc Vocabulary) -> Self {
        Self {
            vocabulary,
            tokens: Tokenizer::tokenize(source),
            position: 0,
            bound: Vec::new(),
        }
    }

    /// Parses a complete statement, requiring all input to be consumed.
    ///
    /// # Errors
    /// Returns an error if the statement cannot be parsed.
    pub fn parse(&mut self) -> Result<Formula> {
        let formula = self.parse_statement()?;
        while matches!(
            self.current().kind,
            TokenKind::Punctuation('.') | TokenKind::Punctuation('!')
        ) {
            self.advance();
        }
        if matches!(self.current().kind, TokenKind::End) {
            Ok(formula)
        } else {
            Err(self.error_expected("end of input"))
        }
    }

    fn parse_statement(&mut self) -> Result<Formula> {
        if self.peek_phrase(NEGATION_PHRASE_WORDS).as_deref() == Some(NEGATION_PHRASE) {
            self.advance_words(NEGATION_PHRASE_WORDS);
            return Ok(Formula::not(self.parse_statement()?));
        }
        if let Some((ConnectiveWord::Not, n)) = self.peek_connective() {
            self.advance_words(n);
            return Ok(Formula::not(self.parse_statement()?));
        }
        if self.at_conditional() {
            return self.parse_conditional();
        }
        if self.peek_quantifier() {
            let quantified = self.parse_quantified()?;
            return self.continue_connectives(quantified);
        }
        let clause = self.parse_clause()?;
        self.continue_connectives(clause)
    }

    /// `if <antecedent> then <consequent>`.
    fn parse_conditional(&mut self) -> Result<Formula> {
        self.advance_words(1); // "if"
        let first = self.parse_clause()?;
        let antecedent = self.continue_or(first)?;
        self.skip_commas();
        match self.peek_connective() {
            Some((ConnectiveWord::Then, n)) => self.advance_words(n),
            _ => return Err(self.error_expected("'then'")),
        }
        let consequent = self.parse_statement()?;
        Ok(Formula::implies(antecedent, consequent))
    }

    /// A quantified sentence. Scope extends over the trailing connective
    /// chain, which is what makes the renderer's output reparse exactly.
    fn parse_quantified(&mut self) -> Result<Formula> {
        let Some((role, phrase_words)) = self.match_quantifier() else {
            return Err(self.error_expected("a quantifier"));
        };
        // Multi-word quantifier phrases ("for every", "there exists")
        // introduce a variable scoping over a whole statement.
        let scoped = phrase_words > 1;

        let explicit_variable = self.current_variable_word();
        let variable = match &explicit_variable {
            Some(word) => {
                self.advance();
                word.clone()
            }
            None => self.fresh_variable(),
        };

        self.bound.push(variable.clone());
        let body =
            self.parse_quantified_body(role, scoped, explicit_variable.is_some(), &variable);
        self.bound.pop();
        let body = body?;

        Ok(match role {
            QuantifierWord::Universal => Formula::forall(variable, body),
            QuantifierWord::Existential => Formula::exists(variable, body),
            QuantifierWord::Negated => Formula::not(Formula::exists(variable, body)),
        })
    }

    fn parse_quantified_body(
        &mut self,
        role: QuantifierWord,
        scoped: bool,
        explicit_variable: bool,
        variable: &str,
    ) -> Result<Formula> {
        if scoped {
            self.skip_commas();
            if self.peek_phrase(2).as_deref() == Some("such that") {
                self.advance_words(2);
            }
            return self.parse_statement();
        }

        // Restrictor template: `<noun>`, with a copula intro in the
        // explicit-variable form ("some x is a student").
        let mut negated_restrictor = false;
        if explicit_variable && self.current_is_copula() {
            self.advance();
            if let Some((ConnectiveWord::Not, n)) = self.peek_connective() {
                self.advance_words(n);
                negated_restrictor = true;
            }
        }
        self.skip_articles();

        let restrictor_span = self.current().span;
        let Some(entry) = self.match_predicate_phrase() else {
            return Err(self.unknown_or_expected("a noun"));
        };
        if entry.arity != 1 {
            return Err(Error::unexpected_token(
                format!("'{}'", entry.phrase),
                "a one-place predicate",
            )
            .with_span(restrictor_span));
        }
        let mut restrictor =
            Formula::predicate(entry.symbol.clone(), vec![Term::Variable(variable.to_string())]);
        if negated_restrictor {
            restrictor = Formula::not(restrictor);
        }

        let core = self.parse_quantified_continuation(role, restrictor, variable)?;
        self.continue_connectives(core)
    }

    /// The predicate part after a restrictor: `is [not] [a/an] <predicate>
    /// [object]`, a bare verb with an optional object, or nothing.
    fn parse_quantified_continuation(
        &mut self,
        role: QuantifierWord,
        restrictor: Formula,
        variable: &str,
    ) -> Result<Formula> {
        let subject = Term::Variable(variable.to_string());
        let predicate = if self.current_is_copula() {
            self.advance();
            Some(self.parse_copular_predicate(subject)?)
        } else if let Some(entry) = self.match_predicate_phrase() {
            Some(self.apply_predicate(entry, subject)?)
        } else {
            None
        };

        Ok(match predicate {
            Some(p) => match role {
                QuantifierWord::Universal => Formula::implies(restrictor, p),
                QuantifierWord::Existential | QuantifierWord::Negated => {
                    Formula::and(restrictor, p)
                }
            },
            None => restrictor,
        })
    }

    /// An atomic clause: a subject followed by a copula or verb predicate.
    /// Nested quantified sentences and negations are clauses too.
    fn parse_clause(&mut self) -> Result<Formula> {
        if self.peek_phrase(NEGATION_PHRASE_WORDS).as_deref() == Some(NEGATION_PHRASE) {
            self.advance_words(NEGATION_PHRASE_WORDS);
            return Ok(Formula::not(self.parse_statement()?));
        }
        if self.at_conditional() {
            return self.parse_conditional();
        }
        if self.peek_quantifier() {
            return self.parse_quantified();
        }

        let subject = self.parse_term("a subject")?;
        if self.current_is_copula() {
            self.advance();
            self.parse_copular_predicate(subject)
        } else if let Some(entry) = self.match_predicate_phrase() {
            self.apply_predicate(entry, subject)
        } else {
            Err(self.unknown_or_expected("a verb or 'is'"))
        }
    }

    /// After a consumed copula: `[not] [a/an] <predicate> [object]`.
    fn parse_copular_predicate(&mut self, subject: Term) -> Result<Formula> {
        let negated = if let Some((ConnectiveWord::Not, n)) = self.peek_connective() {
            self.advance_words(n);
            true
        } else {
            false
        };
        self.skip_articles();

        let Some(entry) = self.match_predicate_phrase() else {
            return Err(self.unknown_or_expected("a predicate"));
        };
        let formula = self.apply_predicate(entry, subject)?;
        Ok(if negated {
            Formula::not(formula)
        } else {
            formula
        })
    }

    /// Applies a matched predicate to a subject, reading the object for
    /// two-place predicates.
    fn apply_predicate(&mut self, entry: &PredicateEntry, subject: Term) -> Result<Formula> {
        match entry.arity {
            1 => Ok(Formula::predicate(entry.symbol.clone(), vec![subject])),
            2 => {
                let object = self.parse_term("a name or variable")?;
                Ok(Formula::predicate(
                    entry.symbol.clone(),
                    vec![subject, object],
                ))
            }
            _ => Err(Error::internal(format!(
                "predicate {} has arity {}, which the sentence grammar cannot express",
                entry.symbol, entry.arity
            ))),
        }
    }

    /// A term: a bound variable or a known constant.
    fn parse_term(&mut self, expected: &str) -> Result<Term> {
        let span = self.current().span;
        let Some(word) = self.current().word().map(str::to_string) else {
            return Err(self.error_expected(expected));
        };
        let lower = word.to_lowercase();

        if is_variable_word(&lower) {
            if !self.bound.contains(&lower) {
                return Err(Error::unbound_variable(lower).with_span(span));
            }
            self.advance();
            return Ok(Term::Variable(lower));
        }
        if let Some(symbol) = self.vocabulary.lookup_constant(&lower) {
            let symbol = symbol.to_string();
            self.advance();
            return Ok(Term::Constant(symbol));
        }
        Err(self.unknown_or_expected(expected))
    }

    // ------------------------------------------------------------------
    // Connective chains: and binds tightest, then or, implies, iff.
    // ------------------------------------------------------------------

    fn continue_and(&mut self, mut left: Formula) -> Result<Formula> {
        loop {
            self.skip_commas();
            match self.peek_connective() {
                Some((ConnectiveWord::And, n)) => {
                    self.advance_words(n);
                    let right = self.parse_clause()?;
                    left = Formula::and(left, right);
                }
                _ => return Ok(left),
            }
        }
    }

    fn continue_or(&mut self, left: Formula) -> Result<Formula> {
        let mut left = self.continue_and(left)?;
        loop {
            self.skip_commas();
            match self.peek_connective() {
                Some((ConnectiveWord::Or, n)) => {
                    self.advance_words(n);
                    let clause = self.parse_clause()?;
                    let right = self.continue_and(clause)?;
                    left = Formula::or(left, right);
                }
                _ => return Ok(left),
            }
        }
    }

    fn continue_implies(&mut self, left: Formula) -> Result<Formula> {
        let left = self.continue_or(left)?;
        self.skip_commas();
        if let Some((ConnectiveWord::Implies, n)) = self.peek_connective() {
            self.advance_words(n);
            let clause = self.parse_clause()?;
            let right = self.continue_implies(clause)?;
            Ok(Formula::implies(left, right))
        } else {
            Ok(left)
        }
    }

    fn continue_connectives(&mut self, left: Formula) -> Result<Formula> {
        let left = self.continue_implies(left)?;
        self.skip_commas();
        if let Some((ConnectiveWord::Iff, n)) = self.peek_connective() {
            self.advance_words(n);
            let clause = self.parse_clause()?;
            let right = self.continue_connectives(clause)?;
            Ok(Formula::iff(left, right))
        } else {
            Ok(left)
        }
    }

    // ------------------------------------------------------------------
    // Vocabulary-driven lookahead
    // ------------------------------------------------------------------

    /// True if the current word opens a conditional (a bare "if", not the
    /// start of "if and only if").
    fn at_conditional(&self) -> bool {
        matches!(self.peek_connective(), Some((ConnectiveWord::If, 1)))
    }

    /// True if a quantifier word or phrase starts here.
    fn peek_quantifier(&self) -> bool {
        let max = self.vocabulary.max_phrase_words().max(1);
        (1..=max).rev().any(|n| {
            self.peek_phrase(n)
                .is_some_and(|phrase| self.vocabulary.lookup_quantifier(&phrase).is_some())
        })
    }

    /// Matches and consumes a quantifier, longest phrase first.
    fn match_quantifier(&mut self) -> Option<(QuantifierWord, usize)> {
        let max = self.vocabulary.max_phrase_words().max(1);
        for n in (1..=max).rev() {
            if let Some(phrase) = self.peek_phrase(n) {
                if let Some(role) = self.vocabulary.lookup_quantifier(&phrase) {
                    self.advance_words(n);
                    return Some((role, n));
                }
            }
        }
        None
    }

    /// Peeks the next connective, longest phrase first, without consuming.
    fn peek_connective(&self) -> Option<(ConnectiveWord, usize)> {
        let max = self.vocabulary.max_phrase_words().max(1);
        for n in (1..=max).rev() {
            if let Some(phrase) = self.peek_phrase(n) {
                if let Some(role) = self.vocabulary.lookup_connective(&phrase) {
                    return Some((role, n));
                }
            }
        }
        None
    }

    /// Matches and consumes a predicate surface phrase, longest first.
    fn match_predicate_phrase(&mut self) -> Option<&'voc PredicateEntry> {
        let max = self.vocabulary.max_phrase_words().max(1);
        for n in (1..=max).rev() {
            if let Some(phrase) = self.peek_phrase(n) {
                let vocabulary = self.vocabulary;
                if let Some(entry) = vocabulary.lookup_phrase(&phrase) {
                    self.advance_words(n);
                    return Some(entry);
                }
            }
        }
        None
    }

    /// Lowercased join of the next `words` word tokens, if present.
    fn peek_phrase(&self, words: usize) -> Option<String> {
        let mut parts = Vec::with_capacity(words);
        for offset in 0..words {
            match self.tokens.get(self.position + offset).map(|t| &t.kind) {
                Some(TokenKind::Word(text)) => parts.push(text.to_lowercase()),
                _ => return None,
            }
        }
        Some(parts.join(" "))
    }

    fn current_is_copula(&self) -> bool {
        self.current()
            .word()
            .is_some_and(|w| self.vocabulary.is_copula(w))
    }

    fn current_variable_word(&self) -> Option<String> {
        let word = self.current().word()?.to_lowercase();
        is_variable_word(&word).then_some(word)
    }

    /// First conventional variable name not already bound in this scope.
    fn fresh_variable(&self) -> String {
        VARIABLE_WORDS
            .iter()
            .find(|&&candidate| !self.bound.iter().any(|b| b == candidate))
            .map_or_else(|| "x".to_string(), |&c| c.to_string())
    }

    fn skip_articles(&mut self) {
        while self
            .current()
            .word()
            .is_some_and(|w| self.vocabulary.is_article(w))
        {
            self.advance();
        }
    }

    fn skip_commas(&mut self) {
        while matches!(self.current().kind, TokenKind::Punctuation(',')) {
            self.advance();
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

    fn advance_words(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// An unknown-word error when the offending token is a word outside the
    /// vocabulary, otherwise a syntax error describing what was expected.
    fn unknown_or_expected(&self, expected: &str) -> Error {
        if let TokenKind::Word(word) = &self.current().kind {
            let lower = word.to_lowercase();
            let known = self.vocabulary.lookup_phrase(&lower).is_some()
                || self.vocabulary.lookup_quantifier(&lower).is_some()
                || self.vocabulary.lookup_connective(&lower).is_some()
                || self.vocabulary.lookup_constant(&lower).is_some()
                || self.vocabulary.is_copula(&lower)
                || self.vocabulary.is_article(&lower)
                || is_variable_word(&lower);
            if !known {
                return Error::unknown_word(word.clone()).with_span(self.current().span);
            }
        }
        self.error_expected(expected)
    }

    fn error_expected(&self, expected: &str) -> Error {
        let token = self.current();
        match &token.kind {
            TokenKind::End => Error::unexpected_end(expected).with_span(token.span),
            TokenKind::Error(c) => Error::unexpected_character(*c).with_span(token.span),
            TokenKind::Punctuation(c) => {
                Error::unexpected_token(format!("'{c}'"), expected).with_span(token.span)
            }
            TokenKind::Word(word) => {
                Error::unexpected_token(format!("'{word}'"), expected).with_span(token.span)
            }
        }
    }
}

fn is_variable_word(word: &str) -> bool {
    VARIABLE_WORDS.contains(&word)
}
