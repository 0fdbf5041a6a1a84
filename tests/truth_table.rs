//! End-to-end tests for the parse / enumerate / evaluate pipeline.

use std::collections::HashSet;

use truth_table::assignment::Assignment;
use truth_table::catalogue::Catalogue;
use truth_table::table::TruthTable;
use truth_table::{assignments, catalogue, evaluate, parse, variables, Error};

const FORMULAS: &[&str] = &[
    "p",
    "¬p",
    "p ∧ q",
    "¬p ∨ q",
    "p ∧ q ∧ r",
    "p ⇒ q ⇒ r",
    "p ∨ q ∧ ¬r ⇒ s ⇔ t",
    "¬(p ∧ q) ∨ (q ⇒ ¬r)",
    "(a ⇔ B) ∧ (B ⇔ c) ⇒ (a ⇔ c)",
    "¬¬¬p ∧ (p ∨ ¬q)",
    "((p))",
];

const LAWS: &[&str] = &[
    "(p ∨ q) ⇔ (q ∨ p)",
    "(p ∧ q) ⇔ (q ∧ p)",
    "(p ∧ (q ∧ r)) ⇔ ((p ∧ q) ∧ r)",
    "(p ∨ (q ∧ r)) ⇔ ((p ∨ q) ∧ (p ∨ r))",
    "(p ∧ (q ∨ r)) ⇔ ((p ∧ q) ∨ (p ∧ r))",
    "(p ∨ p) ⇔ (p)",
    "(p ∧ p) ⇔ (p)",
    "(¬(¬p)) ⇔ (p)",
    "(p ⇒ q) ⇔ (¬p ∨ q)",
    "(¬(p ∧ q)) ⇔ (¬p ∨ ¬q)",
    "(¬(p ∨ q)) ⇔ (¬p ∧ ¬q)",
    "(p ⇔ q) ⇔ ((p ⇒ q) ∧ (q ⇒ p))",
];

fn all_assignments(formula: &str) -> Vec<Assignment> {
    let (count, names) = variables(formula);
    assignments(count, &names).unwrap()
}

// ─── Scenarios ─────────────────────────────────────────────────────────────────

#[test]
fn conjunction_table() {
    let formula = "p ∧ q";
    let (count, names) = variables(formula);
    assert_eq!(count, 2);
    assert_eq!(names, ['p', 'q']);

    let rows = assignments(count, &names).unwrap();
    let rows_values: Vec<Vec<bool>> = rows.iter().map(|a| a.values().collect()).collect();
    assert_eq!(
        rows_values,
        [[true, true], [true, false], [false, true], [false, false]]
    );

    let postfix = parse(formula).unwrap();
    let outputs: Vec<bool> = rows
        .iter()
        .map(|a| *evaluate(&postfix, a).unwrap().last().unwrap())
        .collect();
    assert_eq!(outputs, [true, false, false, false]);
}

#[test]
fn negated_disjunction_on_all_false() {
    let postfix = parse("¬p ∨ q").unwrap();
    let a: Assignment = [('p', false), ('q', false)].into_iter().collect();
    let values = evaluate(&postfix, &a).unwrap();
    assert_eq!(values.last(), Some(&true));
}

#[test]
fn equal_precedence_chain_is_right_leaning() {
    let postfix = parse("p ∧ q ∧ r").unwrap();
    assert_eq!(postfix.to_string(), "p q r ∧ ∧");
    assert_ne!(postfix, parse("(p ∧ q) ∧ r").unwrap());
    assert_eq!(postfix, parse("p ∧ (q ∧ r)").unwrap());
}

#[test]
fn implication_tautology() {
    let table = TruthTable::new("(p ⇒ q) ⇔ (¬p ∨ q)").unwrap();
    assert_eq!(table.rows().len(), 4);
    assert!(table.outputs().all(|v| v));
}

#[test]
fn unbalanced_parentheses() {
    for formula in ["(p ∧ q", "p ∧ q)", "(p ∧ (q)"] {
        let res = parse(formula);
        assert!(
            matches!(res, Err(Error::UnbalancedParen { .. })),
            "{}: {:?}",
            formula,
            res
        );
    }
}

#[test]
fn catalogue_only_evaluates_its_own_formula() {
    let postfix = parse("p ∧ q").unwrap();
    let cat = Catalogue::new(&postfix).unwrap();
    let a: Assignment = [('p', true), ('q', false)].into_iter().collect();
    assert_eq!(cat.evaluate(&postfix, &a).unwrap(), [false]);

    let res = cat.evaluate(&parse("p ∨ q").unwrap(), &a);
    assert!(
        matches!(res, Err(Error::CatalogueMismatch { .. })),
        "{:?}",
        res
    );
}

#[test]
fn laws_are_tautologies() {
    for law in LAWS {
        let table = TruthTable::new(law).unwrap();
        assert!(table.is_tautology(), "{} is not a tautology", law);
    }
}

// ─── Properties ────────────────────────────────────────────────────────────────

#[test]
fn last_column_is_formula_value() {
    for formula in FORMULAS.iter().chain(LAWS) {
        let postfix = parse(formula).unwrap();
        let cat = Catalogue::new(&postfix).unwrap();
        assert!(!cat.is_empty(), "{}", formula);
        for a in all_assignments(formula) {
            let values = cat.evaluate(&postfix, &a).unwrap();
            assert_eq!(values.len(), cat.len());
            assert_eq!(
                values.last().copied(),
                Some(postfix.eval(&a).unwrap()),
                "{} at {}",
                formula,
                a
            );
        }
    }
}

#[test]
fn last_label_round_trips() {
    for formula in FORMULAS.iter().chain(LAWS) {
        let postfix = parse(formula).unwrap();
        let labels = catalogue(&postfix).unwrap();
        let reparsed = parse(labels.last().unwrap()).unwrap();
        for a in all_assignments(formula) {
            assert_eq!(
                postfix.eval(&a).unwrap(),
                reparsed.eval(&a).unwrap(),
                "{} vs {} at {}",
                formula,
                labels.last().unwrap(),
                a
            );
        }
    }
}

#[test]
fn every_label_evaluates_to_its_column() {
    for formula in FORMULAS.iter().chain(LAWS) {
        let table = TruthTable::new(formula).unwrap();
        for (column, label) in table.labels().iter().enumerate() {
            let sub = parse(label).unwrap();
            for row in table.rows() {
                assert_eq!(
                    sub.eval(&row.assignment).unwrap(),
                    row.values[column],
                    "{} in {}",
                    label,
                    formula
                );
            }
        }
    }
}

#[test]
fn labels_are_distinct() {
    for formula in FORMULAS.iter().chain(LAWS) {
        let labels = catalogue(&parse(formula).unwrap()).unwrap();
        let distinct: HashSet<&String> = labels.iter().collect();
        assert_eq!(distinct.len(), labels.len(), "{}", formula);
    }
}

#[test]
fn assignments_cover_every_vector_once() {
    let names = ['a', 'b', 'c', 'd'];
    let rows = assignments(names.len(), &names).unwrap();
    assert_eq!(rows.len(), 16);

    let vectors: HashSet<Vec<bool>> = rows.iter().map(|a| a.values().collect()).collect();
    assert_eq!(vectors.len(), 16);
    for k in 0u32..16 {
        let v: Vec<bool> = (0..4).rev().map(|i| (k >> i) & 1 == 1).collect();
        assert!(vectors.contains(&v));
    }
}

#[test]
fn table_shape() {
    let table = TruthTable::new("(p ⇒ q) ∧ r").unwrap();
    let header = table.header();
    assert_eq!(header, ["p", "q", "r", "p ⇒ q", "(p ⇒ q) ∧ r"]);
    for record in table.records() {
        assert_eq!(record.len(), header.len());
        assert!(record.iter().all(|&cell| cell == "T" || cell == "F"));
    }
    assert_eq!(table.records().count(), 8);
}
