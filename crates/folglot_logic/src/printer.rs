//! Canonical printer for FOL notation.
//!
//! Printing is total and deterministic: the same formula always produces the
//! same text, and the parser accepts exactly what the printer emits.
//! Parentheses are inserted only where precedence would otherwise be
//! ambiguous: a binary operand is wrapped when its operator binds looser than
//! the parent's, or equally tight on the non-associative side; a quantifier
//! body is wrapped exactly when its top-level operator is a binary
//! connective.

use folglot_foundation::{Formula, Quantifier, Term};

/// Binding strength; higher binds tighter.
const PREC_IFF: u8 = 1;
const PREC_IMPLIES: u8 = 2;
const PREC_OR: u8 = 3;
const PREC_AND: u8 = 4;
const PREC_UNARY: u8 = 5;
const PREC_ATOM: u8 = 6;

/// Prints a formula in canonical FOL notation.
#[must_use]
pub fn print(formula: &Formula) -> String {
    let mut output = String::new();
    write_formula(formula, &mut output);
    output
}

fn precedence(formula: &Formula) -> u8 {
    match formula {
        Formula::Iff(_, _) => PREC_IFF,
        Formula::Implies(_, _) => PREC_IMPLIES,
        Formula::Or(_, _) => PREC_OR,
        Formula::And(_, _) => PREC_AND,
        Formula::Not(_) | Formula::Quantified { .. } => PREC_UNARY,
        Formula::Predicate { .. } => PREC_ATOM,
    }
}

fn write_formula(formula: &Formula, output: &mut String) {
    match formula {
        Formula::Quantified {
            quantifier,
            variable,
            body,
        } => {
            output.push(match quantifier {
                Quantifier::Universal => '∀',
                Quantifier::Existential => '∃',
            });
            output.push_str(variable);
            if body.is_binary() {
                output.push('(');
                write_formula(body, output);
                output.push(')');
            } else {
                output.push(' ');
                write_formula(body, output);
            }
        }
        Formula::Not(operand) => {
            output.push('¬');
            write_operand(operand, PREC_UNARY, output);
        }
        Formula::And(left, right) => {
            // Left-associative: the right operand needs parentheses at equal
            // precedence, the left does not.
            write_operand(left, PREC_AND, output);
            output.push_str(" ∧ ");
            write_operand(right, PREC_AND + 1, output);
        }
        Formula::Or(left, right) => {
            write_operand(left, PREC_OR, output);
            output.push_str(" ∨ ");
            write_operand(right, PREC_OR + 1, output);
        }
        Formula::Implies(antecedent, consequent) => {
            // Right-associative: the left operand needs parentheses at equal
            // precedence.
            write_operand(antecedent, PREC_IMPLIES + 1, output);
            output.push_str(" → ");
            write_operand(consequent, PREC_IMPLIES, output);
        }
        Formula::Iff(left, right) => {
            write_operand(left, PREC_IFF + 1, output);
            output.push_str(" ↔ ");
            write_operand(right, PREC_IFF, output);
        }
        Formula::Predicate { name, args } => {
            output.push_str(name);
            output.push('(');
            for (index, term) in args.iter().enumerate() {
                if index > 0 {
                    output.push_str(", ");
                }
                write_term(term, output);
            }
            output.push(')');
        }
    }
}

/// Writes an operand, parenthesizing when it binds looser than required.
fn write_operand(operand: &Formula, required: u8, output: &mut String) {
    if precedence(operand) < required {
        output.push('(');
        write_formula(operand, output);
        output.push(')');
    } else {
        write_formula(operand, output);
    }
}

fn write_term(term: &Term, output: &mut String) {
    match term {
        Term::Variable(name) | Term::Constant(name) => output.push_str(name),
    }
}
