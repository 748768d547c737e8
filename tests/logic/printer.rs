//! Integration tests for the canonical FOL printer.
//!
//! The printer's output is the notation the parser accepts; these tests pin
//! the canonical spelling of representative formulas.

use folglot::logic::{parse, print};
use folglot::{Formula, Term, Vocabulary};

fn var(name: &str) -> Term {
    Term::Variable(name.into())
}

fn unary(symbol: &str, term: Term) -> Formula {
    Formula::predicate(symbol, vec![term])
}

#[test]
fn canonical_universal_implication() {
    let f = Formula::forall(
        "x",
        Formula::implies(unary("Human", var("x")), unary("Mortal", var("x"))),
    );
    assert_eq!(print(&f), "∀x(Human(x) → Mortal(x))");
}

#[test]
fn canonical_negated_existential() {
    let f = Formula::not(Formula::exists(
        "x",
        Formula::and(unary("Student", var("x")), unary("Teacher", var("x"))),
    ));
    assert_eq!(print(&f), "¬∃x(Student(x) ∧ Teacher(x))");
}

#[test]
fn arguments_join_with_comma_and_space() {
    let f = Formula::predicate(
        "Loves",
        vec![
            Term::Constant("alice".into()),
            Term::Constant("bob".into()),
        ],
    );
    assert_eq!(print(&f), "Loves(alice, bob)");
}

#[test]
fn atomic_quantifier_bodies_are_not_parenthesized() {
    let f = Formula::forall("x", unary("Human", var("x")));
    assert_eq!(print(&f), "∀x Human(x)");
}

#[test]
fn parentheses_appear_only_where_needed() {
    let a = || unary("Wise", Term::Constant("plato".into()));
    let b = || unary("Happy", Term::Constant("bob".into()));
    let c = || unary("Mortal", Term::Constant("mary".into()));

    assert_eq!(
        print(&Formula::or(Formula::and(a(), b()), c())),
        "Wise(plato) ∧ Happy(bob) ∨ Mortal(mary)"
    );
    assert_eq!(
        print(&Formula::and(a(), Formula::or(b(), c()))),
        "Wise(plato) ∧ (Happy(bob) ∨ Mortal(mary))"
    );
    assert_eq!(
        print(&Formula::not(Formula::and(a(), b()))),
        "¬(Wise(plato) ∧ Happy(bob))"
    );
    assert_eq!(print(&Formula::not(Formula::not(a()))), "¬¬Wise(plato)");
}

#[test]
fn printed_notation_reparses_to_the_same_formula() {
    let vocabulary = Vocabulary::standard();
    let cases = [
        Formula::forall(
            "x",
            Formula::implies(unary("Human", var("x")), unary("Mortal", var("x"))),
        ),
        Formula::not(Formula::exists(
            "x",
            Formula::and(unary("Student", var("x")), unary("Teacher", var("x"))),
        )),
        Formula::forall(
            "x",
            Formula::exists("y", Formula::predicate("Loves", vec![var("x"), var("y")])),
        ),
        Formula::iff(
            unary("Wise", Term::Constant("socrates".into())),
            Formula::implies(
                unary("Happy", Term::Constant("bob".into())),
                unary("Mortal", Term::Constant("mary".into())),
            ),
        ),
    ];
    for formula in cases {
        let printed = print(&formula);
        let reparsed = parse(&printed, &vocabulary).unwrap();
        assert_eq!(reparsed, formula, "notation: {printed}");
    }
}

#[test]
fn canonical_spelling_is_a_fixed_point() {
    let vocabulary = Vocabulary::standard();
    for source in [
        "∀x(Human(x) → Mortal(x))",
        "¬∃x(Student(x) ∧ Teacher(x))",
        "∀x Human(x)",
        "∀x ∃y Loves(x, y)",
        "Wise(plato) ∧ Happy(bob) ∨ Mortal(mary)",
        "Loves(alice, bob)",
    ] {
        let formula = parse(source, &vocabulary).unwrap();
        assert_eq!(print(&formula), source);
    }
}
