//! Integration tests for the formula AST.
//!
//! Tests construction, structural equality, and free-variable analysis.

use folglot::{Formula, Quantifier, Term};

fn var(name: &str) -> Term {
    Term::Variable(name.into())
}

fn unary(symbol: &str, term: Term) -> Formula {
    Formula::predicate(symbol, vec![term])
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn constructors_box_their_children() {
    let f = Formula::implies(unary("Human", var("x")), unary("Mortal", var("x")));
    let Formula::Implies(antecedent, consequent) = f else {
        panic!("expected implication");
    };
    assert_eq!(*antecedent, unary("Human", var("x")));
    assert_eq!(*consequent, unary("Mortal", var("x")));
}

#[test]
fn quantifier_constructors_set_the_quantifier() {
    let all = Formula::forall("x", unary("Human", var("x")));
    let some = Formula::exists("x", unary("Human", var("x")));
    assert!(matches!(
        all,
        Formula::Quantified {
            quantifier: Quantifier::Universal,
            ..
        }
    ));
    assert!(matches!(
        some,
        Formula::Quantified {
            quantifier: Quantifier::Existential,
            ..
        }
    ));
}

#[test]
fn structural_equality_is_exact() {
    let a = Formula::forall("x", unary("Human", var("x")));
    let b = Formula::forall("x", unary("Human", var("x")));
    let c = Formula::forall("y", unary("Human", var("y")));
    assert_eq!(a, b);
    assert_ne!(a, c); // variable names are part of the structure
}

// =============================================================================
// Free variables
// =============================================================================

#[test]
fn free_variables_in_first_occurrence_order() {
    let f = Formula::and(
        Formula::predicate("Loves", vec![var("y"), var("x")]),
        unary("Happy", var("y")),
    );
    assert_eq!(f.free_variables(), vec!["y".to_string(), "x".to_string()]);
}

#[test]
fn quantifier_binds_its_variable() {
    let f = Formula::forall("x", Formula::predicate("Loves", vec![var("x"), var("y")]));
    assert_eq!(f.free_variables(), vec!["y".to_string()]);
    assert!(!f.is_closed());
}

#[test]
fn binding_does_not_leak_out_of_scope() {
    // ∀x(Human(x)) ∧ Happy(x): the second x is free.
    let f = Formula::and(
        Formula::forall("x", unary("Human", var("x"))),
        unary("Happy", var("x")),
    );
    assert_eq!(f.free_variables(), vec!["x".to_string()]);
}

#[test]
fn ground_formulas_are_closed() {
    let f = Formula::iff(
        unary("Wise", Term::Constant("socrates".into())),
        unary("Happy", Term::Constant("socrates".into())),
    );
    assert!(f.is_closed());
}
