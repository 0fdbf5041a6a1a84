//! Variables of a formula and the truth assignments over them.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use num_bigint::BigUint;

use crate::error::Error;
use crate::token::is_variable;

/// Largest number of variables [`Assignments`] can enumerate.
pub const MAX_VARIABLES: usize = 63;

/// Mapping from variables to truth values.
///
/// Iteration follows variable order, which is also the column order of a truth table.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Assignment {
    values: BTreeMap<char, bool>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, var: char) -> Option<bool> {
        self.values.get(&var).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, bool)> + '_ {
        self.values.iter().map(|(&var, &value)| (var, value))
    }

    /// Truth values in variable order.
    pub fn values(&self) -> impl Iterator<Item = bool> + '_ {
        self.values.values().copied()
    }
}

impl FromIterator<(char, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (char, bool)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (var, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", var, if value { 'T' } else { 'F' })?;
        }
        write!(f, "}}")
    }
}

/// Distinct variables of `formula`, sorted, together with their count.
///
/// Scans the raw text, so it does not need the formula to parse.
pub fn variables(formula: &str) -> (usize, Vec<char>) {
    let names: BTreeSet<char> = formula
        .chars()
        .filter(|ch| is_variable(ch.encode_utf8(&mut [0; 4])))
        .collect();
    (names.len(), names.into_iter().collect())
}

/// Number of rows in a truth table over `num_vars` variables.
pub fn row_count(num_vars: usize) -> BigUint {
    BigUint::from(1u32) << num_vars
}

/// All `2^count` assignments over `names`, counting down in binary.
///
/// Row `k` is the binary expansion of `2^count - 1 - k`, most significant digit bound to
/// `names[0]`, so the all-true row comes first and the all-false row last.
///
/// Fails with [`VariableCountMismatch`][Error::VariableCountMismatch] if `count` is not
/// `names.len()`, and with [`TooManyVariables`][Error::TooManyVariables] past
/// [`MAX_VARIABLES`].
pub fn assignments(count: usize, names: &[char]) -> Result<Vec<Assignment>, Error> {
    if count != names.len() {
        return Err(Error::VariableCountMismatch {
            count,
            names: names.len(),
        });
    }
    Ok(Assignments::new(names)?.collect())
}

/// Lazy counterpart of [`assignments`].
#[derive(Debug, Clone)]
pub struct Assignments {
    names: Vec<char>,
    /// Integer encoding of the next row, `None` once the all-false row has been produced.
    next: Option<u64>,
}

impl Assignments {
    pub fn new(names: &[char]) -> Result<Self, Error> {
        if names.len() > MAX_VARIABLES {
            return Err(Error::TooManyVariables(names.len()));
        }
        let first = (1u64 << names.len()) - 1;
        Ok(Self {
            names: names.to_vec(),
            next: Some(first),
        })
    }

    fn decode(&self, row: u64) -> Assignment {
        let n = self.names.len();
        self.names
            .iter()
            .enumerate()
            .map(|(i, &name)| (name, (row >> (n - 1 - i)) & 1 == 1))
            .collect()
    }
}

impl Iterator for Assignments {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.next?;
        self.next = row.checked_sub(1);
        Some(self.decode(row))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next.and_then(|row| usize::try_from(row).ok()) {
            Some(row) => (row + 1, Some(row + 1)),
            None if self.next.is_none() => (0, Some(0)),
            None => (usize::MAX, None),
        }
    }
}
