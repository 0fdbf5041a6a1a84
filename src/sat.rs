use std::fmt;

use num_bigint::BigUint;

use crate::assignment::Assignment;
use crate::table::TruthTable;

/// Where a formula sits between always false and always true.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Satisfiability {
    /// True on every row.
    Tautology,
    /// True on some rows and false on others.
    Contingency,
    /// False on every row.
    Contradiction,
}

impl fmt::Display for Satisfiability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Satisfiability::Tautology => "tautology",
            Satisfiability::Contingency => "contingency",
            Satisfiability::Contradiction => "contradiction",
        };
        write!(f, "{}", name)
    }
}

impl TruthTable {
    /// Returns the first row (in table order) on which the formula holds, if any.
    pub fn one_sat(&self) -> Option<&Assignment> {
        self.rows()
            .iter()
            .find(|row| row.output())
            .map(|row| &row.assignment)
    }

    /// Number of rows on which the formula holds.
    pub fn sat_count(&self) -> BigUint {
        BigUint::from(self.outputs().filter(|&value| value).count())
    }

    pub fn satisfiability(&self) -> Satisfiability {
        let mut outputs = self.outputs();
        let first = outputs.next().unwrap_or_default();
        if outputs.all(|value| value == first) {
            if first {
                Satisfiability::Tautology
            } else {
                Satisfiability::Contradiction
            }
        } else {
            Satisfiability::Contingency
        }
    }

    pub fn is_tautology(&self) -> bool {
        self.satisfiability() == Satisfiability::Tautology
    }

    pub fn is_contradiction(&self) -> bool {
        self.satisfiability() == Satisfiability::Contradiction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use num_bigint::ToBigUint;

    #[test]
    fn test_one_sat() {
        let table = TruthTable::new("¬p ∧ q").unwrap();
        let model = table.one_sat().unwrap();
        println!("model = {}", model);
        assert_eq!(model.get('p'), Some(false));
        assert_eq!(model.get('q'), Some(true));

        let table = TruthTable::new("p ∧ ¬p").unwrap();
        assert_eq!(table.one_sat(), None);
    }

    #[test]
    fn test_sat_count() {
        let table = TruthTable::new("p ∧ q").unwrap();
        assert_eq!(table.sat_count(), 1.to_biguint().unwrap());

        let table = TruthTable::new("p ∨ q").unwrap();
        assert_eq!(table.sat_count(), 3.to_biguint().unwrap());

        let table = TruthTable::new("p ∨ q ∨ r").unwrap();
        assert_eq!(table.sat_count(), 7.to_biguint().unwrap());

        let table = TruthTable::new("p ⇔ ¬p").unwrap();
        assert_eq!(table.sat_count(), 0.to_biguint().unwrap());
    }

    #[test]
    fn test_satisfiability() {
        let table = TruthTable::new("p ∨ ¬p").unwrap();
        assert_eq!(table.satisfiability(), Satisfiability::Tautology);
        assert!(table.is_tautology());

        let table = TruthTable::new("p ∧ ¬p").unwrap();
        assert_eq!(table.satisfiability(), Satisfiability::Contradiction);
        assert!(table.is_contradiction());

        let table = TruthTable::new("p ⇒ q").unwrap();
        assert_eq!(table.satisfiability(), Satisfiability::Contingency);
        assert_eq!(table.satisfiability().to_string(), "contingency");
    }
}
