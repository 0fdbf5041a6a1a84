//! Sub-expression catalogue.
//!
//! The catalogue lists every distinct sub-formula of a formula, in the order its first
//! operator application happens during a postfix replay. The last entry is always the whole
//! formula. Labels are canonical reconstructions: operands that are themselves binary
//! applications are parenthesized, everything else is written bare.
//!
//! ```
//! use truth_table::catalogue::catalogue;
//! use truth_table::parse::parse;
//!
//! let labels = catalogue(&parse("(p ⇒ q) ⇔ (¬p ∨ q)").unwrap()).unwrap();
//! assert_eq!(labels, ["p ⇒ q", "¬p", "¬p ∨ q", "(p ⇒ q) ⇔ (¬p ∨ q)"]);
//! ```
//!
//! Values are matched to labels by application ordinal rather than by text: the value pass
//! replays the same sequence, counts operator applications, and stores the result of
//! application `i` into the slot that application introduced. The catalogue keeps the
//! sequence it was built from, and [`Catalogue::evaluate`] refuses any other one.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use log::debug;

use crate::assignment::Assignment;
use crate::ast::Expr;
use crate::error::Error;
use crate::eval::lookup;
use crate::parse::Postfix;
use crate::token::Operator;

/// Label of a partially reconstructed expression.
struct Fragment {
    text: String,
    /// Whether the fragment is a binary application and needs parentheses when nested.
    binary: bool,
}

impl Fragment {
    fn nested(&self) -> String {
        if self.binary {
            format!("({})", self.text)
        } else {
            self.text.clone()
        }
    }

    fn binary(op: Operator, lhs: String, rhs: String) -> Fragment {
        Fragment {
            text: format!("{} {} {}", lhs, op, rhs),
            binary: true,
        }
    }

    fn build(expr: Expr<char, Fragment>) -> Fragment {
        match expr.fmap(|f| f.nested()) {
            Expr::Var(name) => Fragment {
                text: name.to_string(),
                binary: false,
            },
            Expr::Not(a) => Fragment {
                text: format!("{}{}", Operator::Not, a),
                binary: false,
            },
            Expr::And(a, b) => Fragment::binary(Operator::And, a, b),
            Expr::Or(a, b) => Fragment::binary(Operator::Or, a, b),
            Expr::Implies(a, b) => Fragment::binary(Operator::Implies, a, b),
            Expr::Iff(a, b) => Fragment::binary(Operator::Iff, a, b),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Catalogue {
    postfix: Postfix,
    labels: Vec<String>,
    /// Label -> ordinal of the operator application that first produced it.
    first_seen: HashMap<String, usize>,
    /// Application ordinal -> catalogue slot it introduced, if any.
    slots: Vec<Option<usize>>,
}

impl Catalogue {
    /// Build the catalogue with one symbolic replay of `postfix`.
    ///
    /// A formula without operators (a lone variable) gets a single entry, the variable itself.
    pub fn new(postfix: &Postfix) -> Result<Self, Error> {
        let mut labels = Vec::new();
        let mut first_seen = HashMap::new();
        let mut slots = Vec::with_capacity(postfix.operator_count());

        let root = postfix.collapse(|expr| {
            let applied = expr.operator().is_some();
            let fragment = Fragment::build(expr);
            if !applied {
                return Ok(fragment);
            }
            let ordinal = slots.len();
            match first_seen.entry(fragment.text.clone()) {
                Entry::Occupied(_) => slots.push(None),
                Entry::Vacant(e) => {
                    e.insert(ordinal);
                    slots.push(Some(labels.len()));
                    labels.push(fragment.text.clone());
                }
            }
            Ok(fragment)
        })?;

        if slots.is_empty() {
            labels.push(root.text);
        }

        debug!(
            "catalogue({}) -> {} labels over {} applications",
            postfix,
            labels.len(),
            slots.len()
        );
        Ok(Self {
            postfix: postfix.clone(),
            labels,
            first_seen,
            slots,
        })
    }

    /// The sequence this catalogue was built from.
    pub fn postfix(&self) -> &Postfix {
        &self.postfix
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of operator applications recorded while building the catalogue.
    pub fn applications(&self) -> usize {
        self.slots.len()
    }

    /// Ordinal of the operator application that first produced `label`.
    pub fn first_occurrence(&self, label: &str) -> Option<usize> {
        self.first_seen.get(label).copied()
    }

    /// Values of every catalogue entry under `assignment`, in catalogue order.
    ///
    /// `postfix` must be the sequence this catalogue was built from, otherwise the values
    /// would not line up with the labels and [`CatalogueMismatch`][Error::CatalogueMismatch]
    /// is returned.
    pub fn evaluate(&self, postfix: &Postfix, assignment: &Assignment) -> Result<Vec<bool>, Error> {
        if *postfix != self.postfix {
            return Err(Error::CatalogueMismatch {
                expected: self.postfix.to_string(),
                actual: postfix.to_string(),
            });
        }

        let mut values = vec![false; self.labels.len()];
        let mut ordinal = 0;

        let root = self.postfix.collapse(|expr| {
            if let Expr::Var(name) = expr {
                return lookup(assignment, name);
            }
            let value = expr.eval(|name| lookup(assignment, name))?;
            if let Some(&Some(slot)) = self.slots.get(ordinal) {
                values[slot] = value;
            }
            ordinal += 1;
            Ok(value)
        })?;

        debug_assert_eq!(ordinal, self.slots.len());
        if self.slots.is_empty() {
            values[0] = root;
        }
        Ok(values)
    }
}

/// Labels of every distinct sub-expression of `postfix`, in first-occurrence order.
pub fn catalogue(postfix: &Postfix) -> Result<Vec<String>, Error> {
    Catalogue::new(postfix).map(|c| c.labels)
}
