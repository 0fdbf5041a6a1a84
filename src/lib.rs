//! # truth-table: truth tables for propositional formulas
//!
//! **`truth-table`** parses propositional formulas written in infix notation, converts them to
//! postfix, and evaluates the formula *and every sub-formula inside it* on all truth
//! assignments of its variables.
//!
//! ## Language
//!
//! - Variables are single ASCII letters, case-sensitive: `p`, `q`, `P`.
//! - Operators, from tightest to loosest: `¬` (not), `∧` (and), `∨` (or), `⇒` (implies),
//!   `⇔` (iff).
//! - Parentheses group; whitespace is ignored.
//!
//! ## Pipeline
//!
//! 1. [`parse`][parse::parse] turns the formula into a [`Postfix`][parse::Postfix] sequence
//!    (shunting-yard).
//! 2. [`variables`][assignment::variables] and [`assignments`][assignment::assignments]
//!    enumerate all `2^n` rows, all-true first.
//! 3. [`Catalogue`][catalogue::Catalogue] names every distinct sub-expression once, and
//!    [`Catalogue::evaluate`][catalogue::Catalogue::evaluate] computes their values row by
//!    row.
//!
//! [`TruthTable`][table::TruthTable] runs the whole pipeline and renders it as text or CSV.
//!
//! ## Basic Usage
//!
//! ```rust
//! use truth_table::table::TruthTable;
//!
//! let table = TruthTable::new("(p ⇒ q) ⇔ (¬p ∨ q)").unwrap();
//! assert_eq!(
//!     table.header(),
//!     ["p", "q", "p ⇒ q", "¬p", "¬p ∨ q", "(p ⇒ q) ⇔ (¬p ∨ q)"]
//! );
//! assert!(table.is_tautology());
//! ```
//!
//! The individual stages are available on their own:
//!
//! ```rust
//! use truth_table::{assignments, catalogue, evaluate, parse, variables};
//!
//! let postfix = parse("p ∧ q ∧ r").unwrap();
//! assert_eq!(postfix.to_string(), "p q r ∧ ∧");
//!
//! let (count, names) = variables("p ∧ q ∧ r");
//! let rows = assignments(count, &names).unwrap();
//! assert_eq!(rows.len(), 8);
//!
//! assert_eq!(catalogue(&postfix).unwrap(), ["q ∧ r", "p ∧ (q ∧ r)"]);
//! assert_eq!(evaluate(&postfix, &rows[0]).unwrap(), [true, true]);
//! ```

pub mod assignment;
pub mod ast;
pub mod catalogue;
pub mod error;
pub mod eval;
pub mod parse;
pub mod sat;
pub mod stack;
pub mod table;
pub mod token;

pub use assignment::{assignments, variables};
pub use catalogue::catalogue;
pub use error::Error;
pub use eval::evaluate;
pub use parse::parse;
