//! The formula abstract syntax tree.
//!
//! `Formula` is the single pivot representation shared by both surface
//! syntaxes: the natural-language parser and the FOL parser both produce it,
//! and both renderers consume it. It carries no surface information (no
//! casing, no spans), so a formula renders the same regardless of how it was
//! originally written. Values are immutable; transformations build new trees.

/// A quantifier binding a variable over a formula body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quantifier {
    /// `∀`: "for all".
    Universal,
    /// `∃`: "there exists".
    Existential,
}

/// A term appearing as a predicate argument.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Term {
    /// A variable bound by an enclosing quantifier, like `x`.
    Variable(String),
    /// A named individual, like `socrates`.
    Constant(String),
}

impl Term {
    /// Returns the name of this term.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Variable(name) | Self::Constant(name) => name,
        }
    }

    /// Returns true if this term is a variable.
    #[must_use]
    pub const fn is_variable(&self) -> bool {
        matches!(self, Self::Variable(_))
    }

    /// Returns true if this term is a constant.
    #[must_use]
    pub const fn is_constant(&self) -> bool {
        matches!(self, Self::Constant(_))
    }
}

/// A first-order logic formula.
///
/// This is a closed sum type: every renderer and validator matches it
/// exhaustively, so adding a connective is a compile-time-checked change.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Formula {
    /// A quantified formula like `∀x(...)`.
    Quantified {
        /// Universal or existential.
        quantifier: Quantifier,
        /// The variable bound within the body.
        variable: String,
        /// The formula the quantifier scopes over.
        body: Box<Formula>,
    },
    /// Negation: `¬φ`.
    Not(Box<Formula>),
    /// Conjunction: `φ ∧ ψ`.
    And(Box<Formula>, Box<Formula>),
    /// Disjunction: `φ ∨ ψ`.
    Or(Box<Formula>, Box<Formula>),
    /// Implication: `φ → ψ`.
    Implies(Box<Formula>, Box<Formula>),
    /// Biconditional: `φ ↔ ψ`.
    Iff(Box<Formula>, Box<Formula>),
    /// An atomic predicate application like `Loves(alice, bob)`.
    Predicate {
        /// The predicate symbol, uppercase-initial.
        name: String,
        /// The ordered arguments.
        args: Vec<Term>,
    },
}

impl Formula {
    /// Creates a universally quantified formula.
    #[must_use]
    pub fn forall(variable: impl Into<String>, body: Self) -> Self {
        Self::Quantified {
            quantifier: Quantifier::Universal,
            variable: variable.into(),
            body: Box::new(body),
        }
    }

    /// Creates an existentially quantified formula.
    #[must_use]
    pub fn exists(variable: impl Into<String>, body: Self) -> Self {
        Self::Quantified {
            quantifier: Quantifier::Existential,
            variable: variable.into(),
            body: Box::new(body),
        }
    }

    /// Creates a negation.
    #[must_use]
    pub fn not(operand: Self) -> Self {
        Self::Not(Box::new(operand))
    }

    /// Creates a conjunction.
    #[must_use]
    pub fn and(left: Self, right: Self) -> Self {
        Self::And(Box::new(left), Box::new(right))
    }

    /// Creates a disjunction.
    #[must_use]
    pub fn or(left: Self, right: Self) -> Self {
        Self::Or(Box::new(left), Box::new(right))
    }

    /// Creates an implication.
    #[must_use]
    pub fn implies(antecedent: Self, consequent: Self) -> Self {
        Self::Implies(Box::new(antecedent), Box::new(consequent))
    }

    /// Creates a biconditional.
    #[must_use]
    pub fn iff(left: Self, right: Self) -> Self {
        Self::Iff(Box::new(left), Box::new(right))
    }

    /// Creates an atomic predicate application.
    #[must_use]
    pub fn predicate(name: impl Into<String>, args: Vec<Term>) -> Self {
        Self::Predicate {
            name: name.into(),
            args,
        }
    }

    /// Returns true if the top-level operator is a binary connective.
    #[must_use]
    pub const fn is_binary(&self) -> bool {
        matches!(
            self,
            Self::And(_, _) | Self::Or(_, _) | Self::Implies(_, _) | Self::Iff(_, _)
        )
    }

    /// Returns the free variables of this formula in first-occurrence order.
    #[must_use]
    pub fn free_variables(&self) -> Vec<String> {
        let mut bound = Vec::new();
        let mut free = Vec::new();
        self.collect_free(&mut bound, &mut free);
        free
    }

    /// Returns true if this formula has no free variables.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.free_variables().is_empty()
    }

    fn collect_free(&self, bound: &mut Vec<String>, free: &mut Vec<String>) {
        match self {
            Self::Quantified { variable, body, .. } => {
                bound.push(variable.clone());
                body.collect_free(bound, free);
                bound.pop();
            }
            Self::Not(operand) => operand.collect_free(bound, free),
            Self::And(left, right)
            | Self::Or(left, right)
            | Self::Implies(left, right)
            | Self::Iff(left, right) => {
                left.collect_free(bound, free);
                right.collect_free(bound, free);
            }
            Self::Predicate { args, .. } => {
                for term in args {
                    if let Term::Variable(name) = term {
                        if !bound.contains(name) && !free.contains(name) {
                            free.push(name.clone());
                        }
                    }
                }
            }
        }
    }
}
