//! Integration tests for the English template grammar.
//!
//! The supported grammar is a closed set of sentence templates; these tests
//! enumerate it.

use folglot::english::parse;
use folglot::{ErrorKind, Formula, Stage, Term, Vocabulary};

fn parse_standard(source: &str) -> folglot::Result<Formula> {
    parse(source, &Vocabulary::standard())
}

fn var(name: &str) -> Term {
    Term::Variable(name.into())
}

fn constant(name: &str) -> Term {
    Term::Constant(name.into())
}

fn unary(symbol: &str, term: Term) -> Formula {
    Formula::predicate(symbol, vec![term])
}

// =============================================================================
// Quantifier templates
// =============================================================================

#[test]
fn universal_noun_copula_template() {
    let expected = Formula::forall(
        "x",
        Formula::implies(unary("Human", var("x")), unary("Mortal", var("x"))),
    );
    for sentence in [
        "Every human is mortal",
        "every human is mortal",
        "All human is mortal",
        "Each human is mortal",
        "Every human is mortal.",
    ] {
        assert_eq!(parse_standard(sentence).unwrap(), expected, "{sentence}");
    }
}

#[test]
fn existential_noun_copula_template() {
    let expected = Formula::exists(
        "x",
        Formula::and(unary("Student", var("x")), unary("Happy", var("x"))),
    );
    for sentence in ["Some student is happy", "A student is happy"] {
        assert_eq!(parse_standard(sentence).unwrap(), expected, "{sentence}");
    }
}

#[test]
fn negated_quantifier_template() {
    let f = parse_standard("No student is a teacher.").unwrap();
    assert_eq!(
        f,
        Formula::not(Formula::exists(
            "x",
            Formula::and(unary("Student", var("x")), unary("Teacher", var("x")))
        ))
    );
}

#[test]
fn articles_are_skipped_in_predicate_position() {
    let with_article = parse_standard("Every student is a teacher").unwrap();
    let without_article = parse_standard("Every student is teacher").unwrap();
    assert_eq!(with_article, without_article);
}

#[test]
fn quantified_subject_with_transitive_verb() {
    let f = parse_standard("Every student loves alice").unwrap();
    assert_eq!(
        f,
        Formula::forall(
            "x",
            Formula::implies(
                unary("Student", var("x")),
                Formula::predicate("Loves", vec![var("x"), constant("alice")])
            )
        )
    );
}

#[test]
fn quantified_subject_with_verb_phrase() {
    let f = parse_standard("every bird can fly").unwrap();
    assert_eq!(
        f,
        Formula::forall(
            "x",
            Formula::implies(unary("Bird", var("x")), unary("CanFly", var("x")))
        )
    );
}

#[test]
fn explicit_variable_after_quantifier() {
    let f = parse_standard("some y is a student").unwrap();
    assert_eq!(f, Formula::exists("y", unary("Student", var("y"))));
}

#[test]
fn scoped_quantifier_phrases() {
    let f = parse_standard("for every x, x is human").unwrap();
    assert_eq!(f, Formula::forall("x", unary("Human", var("x"))));

    let f = parse_standard("there exists x such that x is a student").unwrap();
    assert_eq!(f, Formula::exists("x", unary("Student", var("x"))));
}

#[test]
fn nested_quantifier_scopes() {
    let f = parse_standard("for every x, there exists y such that x loves y").unwrap();
    assert_eq!(
        f,
        Formula::forall(
            "x",
            Formula::exists("y", Formula::predicate("Loves", vec![var("x"), var("y")]))
        )
    );
}

#[test]
fn quantifier_scope_extends_over_the_connective_chain() {
    let f = parse_standard("some x is a student and x is happy and x is wise").unwrap();
    let Formula::Quantified { body, .. } = f else {
        panic!("expected quantified formula");
    };
    // Every conjunct mentions x, so they all sit inside the scope.
    assert!(matches!(*body, Formula::And(_, _)));
    assert_eq!(body.free_variables(), vec!["x".to_string()]);
}

// =============================================================================
// Clause templates
// =============================================================================

#[test]
fn copula_clause_over_a_constant() {
    assert_eq!(
        parse_standard("Socrates is human.").unwrap(),
        unary("Human", constant("socrates"))
    );
    assert_eq!(
        parse_standard("socrates is a philosopher").unwrap(),
        unary("Philosopher", constant("socrates"))
    );
}

#[test]
fn transitive_verb_clause() {
    assert_eq!(
        parse_standard("alice loves bob").unwrap(),
        Formula::predicate("Loves", vec![constant("alice"), constant("bob")])
    );
}

#[test]
fn copular_relation_clause() {
    assert_eq!(
        parse_standard("alice is the parent of bob").unwrap(),
        Formula::predicate("ParentOf", vec![constant("alice"), constant("bob")])
    );
    assert_eq!(
        parse_standard("alice is a friend of mary").unwrap(),
        Formula::predicate("FriendOf", vec![constant("alice"), constant("mary")])
    );
}

#[test]
fn intransitive_verb_synonym() {
    // "flies" resolves to the same symbol as "can fly".
    assert_eq!(
        parse_standard("every bird flies").unwrap(),
        parse_standard("every bird can fly").unwrap()
    );
}

// =============================================================================
// Negation
// =============================================================================

#[test]
fn copula_negation() {
    assert_eq!(
        parse_standard("socrates is not happy").unwrap(),
        Formula::not(unary("Happy", constant("socrates")))
    );
}

#[test]
fn negation_phrase_scopes_over_the_statement() {
    let f = parse_standard("it is not the case that socrates is wise and plato is wise").unwrap();
    let Formula::Not(inner) = f else {
        panic!("expected negation at top level");
    };
    assert!(matches!(*inner, Formula::And(_, _)));
}

#[test]
fn leading_not() {
    let f = parse_standard("not socrates is happy").unwrap();
    assert_eq!(f, Formula::not(unary("Happy", constant("socrates"))));
}

// =============================================================================
// Connectives
// =============================================================================

#[test]
fn conjunction_and_disjunction_precedence() {
    let f = parse_standard("socrates is wise or socrates is happy and socrates is mortal").unwrap();
    let Formula::Or(_, right) = f else {
        panic!("expected disjunction at top level");
    };
    assert!(matches!(*right, Formula::And(_, _)));
}

#[test]
fn conditional_template() {
    let f = parse_standard("if socrates is human then socrates is mortal").unwrap();
    assert_eq!(
        f,
        Formula::implies(
            unary("Human", constant("socrates")),
            unary("Mortal", constant("socrates"))
        )
    );
}

#[test]
fn conditional_with_compound_antecedent() {
    let f = parse_standard("if socrates is human and plato is human then socrates is mortal")
        .unwrap();
    let Formula::Implies(antecedent, _) = f else {
        panic!("expected implication");
    };
    assert!(matches!(*antecedent, Formula::And(_, _)));
}

#[test]
fn infix_implies() {
    let f = parse_standard("socrates is human implies socrates is mortal").unwrap();
    assert!(matches!(f, Formula::Implies(_, _)));
}

#[test]
fn biconditional_phrase() {
    let f = parse_standard("socrates is wise if and only if socrates is happy").unwrap();
    assert_eq!(
        f,
        Formula::iff(
            unary("Wise", constant("socrates")),
            unary("Happy", constant("socrates"))
        )
    );
}

#[test]
fn clauses_of_a_chain_may_be_quantified() {
    let f = parse_standard("socrates is wise and every human is mortal").unwrap();
    let Formula::And(_, right) = f else {
        panic!("expected conjunction at top level");
    };
    assert!(matches!(*right, Formula::Quantified { .. }));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn unknown_word_names_the_word_and_its_position() {
    let source = "Every wug is mortal";
    let err = parse_standard(source).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownWord(ref w) if w == "wug"));
    assert_eq!(err.stage(), Stage::Parse);
    assert_eq!(err.span.unwrap().text(source), "wug");
}

#[test]
fn unbound_variable_is_rejected() {
    let err = parse_standard("x is mortal").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnboundVariable(ref v) if v == "x"));
}

#[test]
fn missing_object_is_rejected() {
    let err = parse_standard("alice loves").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnexpectedEnd { .. }));
}

#[test]
fn missing_then_is_rejected() {
    let err = parse_standard("if socrates is human socrates is mortal").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnexpectedToken { .. }));
}

#[test]
fn trailing_words_are_rejected() {
    let err = parse_standard("socrates is human plato").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnexpectedToken { .. }));
}

#[test]
fn unrecognized_characters_are_lexical_errors() {
    let err = parse_standard("alice @ bob").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnexpectedCharacter('@')));
    assert_eq!(err.stage(), Stage::Tokenize);
}

#[test]
fn the_parser_never_guesses_at_malformed_clauses() {
    assert!(parse_standard("loves alice bob").is_err());
    assert!(parse_standard("every is mortal").is_err());
    assert!(parse_standard("is human").is_err());
}
