//! Sentence renderer for formulas.
//!
//! Walks the AST exhaustively and emits the sentence templates the parser
//! accepts, so rendering a formula and reparsing the sentence reproduces the
//! formula for every unambiguous template. Output is lowercase with no
//! trailing period; constants render as their lowercase symbol.
//!
//! The renderer assumes a structurally valid formula: every predicate symbol
//! resolves through the vocabulary at its declared arity, and every variable
//! is bound. The parsers enforce this, so a failure here is an engine defect
//! and surfaces as an internal error.

use folglot_foundation::{Error, Formula, PredicateEntry, Quantifier, Result, Term, Vocabulary};

/// Renders a formula as an English sentence.
///
/// # Errors
/// Returns an internal error if the formula violates the AST invariants
/// (a symbol missing from the vocabulary or applied at the wrong arity).
pub fn render(formula: &Formula, vocabulary: &Vocabulary) -> Result<String> {
    Renderer::new(vocabulary).render(formula)
}

/// Renderer over a fixed vocabulary.
pub struct Renderer<'voc> {
    vocabulary: &'voc Vocabulary,
}

impl<'voc> Renderer<'voc> {
    /// Creates a renderer using the given vocabulary.
    #[must_use]
    pub const fn new(vocabulary: &'voc Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Renders a formula as an English sentence.
    ///
    /// # Errors
    /// Returns an internal error if the formula violates the AST invariants.
    pub fn render(&self, formula: &Formula) -> Result<String> {
        self.render_formula(formula)
    }

    fn render_formula(&self, formula: &Formula) -> Result<String> {
        match formula {
            Formula::Quantified {
                quantifier: Quantifier::Universal,
                variable,
                body,
            } => Ok(format!("for every {variable}, {}", self.render_formula(body)?)),
            Formula::Quantified {
                quantifier: Quantifier::Existential,
                variable,
                body,
            } => {
                // `∃x(P(x) ∧ ...)` with an atomic first conjunct reads as
                // "some x is a P and ...".
                if let Formula::And(first, rest) = body.as_ref() {
                    if let Some(entry) = self.unary_on(first, variable) {
                        return Ok(format!(
                            "some {variable} {} and {}",
                            entry.rendering,
                            self.render_formula(rest)?
                        ));
                    }
                }
                Ok(format!(
                    "there exists {variable} such that {}",
                    self.render_formula(body)?
                ))
            }
            Formula::Not(operand) => self.render_negation(operand),
            Formula::And(left, right) => Ok(format!(
                "{} and {}",
                self.render_formula(left)?,
                self.render_formula(right)?
            )),
            Formula::Or(left, right) => Ok(format!(
                "{} or {}",
                self.render_formula(left)?,
                self.render_formula(right)?
            )),
            Formula::Implies(antecedent, consequent) => Ok(format!(
                "if {} then {}",
                self.render_formula(antecedent)?,
                self.render_formula(consequent)?
            )),
            Formula::Iff(left, right) => Ok(format!(
                "{} if and only if {}",
                self.render_formula(left)?,
                self.render_formula(right)?
            )),
            Formula::Predicate { name, args } => self.render_predicate(name, args),
        }
    }

    fn render_negation(&self, operand: &Formula) -> Result<String> {
        // `¬∃x(P(x) ∧ Q(x))` over two atomic conjuncts reads as "no P Q".
        if let Formula::Quantified {
            quantifier: Quantifier::Existential,
            variable,
            body,
        } = operand
        {
            if let Formula::And(left, right) = body.as_ref() {
                if let (Some(noun), Some(pred)) =
                    (self.unary_on(left, variable), self.unary_on(right, variable))
                {
                    return Ok(format!("no {} {}", noun.phrase, pred.rendering));
                }
            }
        }
        // Copular unary predicates negate in place: "x is not mortal".
        if let Formula::Predicate { name, args } = operand {
            if let [subject] = args.as_slice() {
                let entry = self.entry(name)?;
                if let Some(rest) = entry.rendering.strip_prefix("is ") {
                    return Ok(format!("{} is not {rest}", subject.name()));
                }
            }
        }
        Ok(format!(
            "it is not the case that {}",
            self.render_formula(operand)?
        ))
    }

    fn render_predicate(&self, name: &str, args: &[Term]) -> Result<String> {
        let entry = self.entry(name)?;
        if entry.arity != args.len() {
            return Err(Error::internal(format!(
                "predicate {name} takes {} argument(s), formula applies {}",
                entry.arity,
                args.len()
            )));
        }
        match args {
            [subject] => Ok(format!("{} {}", subject.name(), entry.rendering)),
            [subject, object] => Ok(format!(
                "{} {} {}",
                subject.name(),
                entry.rendering,
                object.name()
            )),
            _ => Err(Error::internal(format!(
                "predicate {name} has arity {}, which the sentence grammar cannot express",
                args.len()
            ))),
        }
    }

    /// The vocabulary entry when `formula` is a unary predicate applied to
    /// exactly the given variable.
    fn unary_on(&self, formula: &Formula, variable: &str) -> Option<&'voc PredicateEntry> {
        if let Formula::Predicate { name, args } = formula {
            if let [Term::Variable(v)] = args.as_slice() {
                if v == variable {
                    return self.vocabulary.lookup_symbol(name);
                }
            }
        }
        None
    }

    fn entry(&self, name: &str) -> Result<&'voc PredicateEntry> {
        self.vocabulary
            .lookup_symbol(name)
            .ok_or_else(|| Error::internal(format!("predicate {name} is not in the vocabulary")))
    }
}
