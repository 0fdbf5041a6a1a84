//! Truth table assembly and output.
//!
//! A [`TruthTable`] has one column per variable followed by one column per catalogue entry,
//! and one row per assignment. The header row is `variables ++ labels`; a data row is the
//! assignment's values followed by the sub-expression values, written as `T` / `F`.
//!
//! # Examples
//!
//! ```
//! use truth_table::table::TruthTable;
//!
//! let table = TruthTable::new("p ∧ q").unwrap();
//! assert_eq!(table.header(), ["p", "q", "p ∧ q"]);
//!
//! let outputs: Vec<bool> = table.outputs().collect();
//! assert_eq!(outputs, [true, false, false, false]);
//! ```

use std::borrow::Cow;
use std::fmt::Write as FmtWrite;
use std::io;

use log::debug;

use crate::assignment::{variables, Assignment, Assignments};
use crate::catalogue::Catalogue;
use crate::error::Error;
use crate::parse::{parse, Postfix};

/// Rendering options for [`TruthTable::to_text_with_config`].
///
/// # Examples
///
/// ```
/// use truth_table::table::{TableConfig, TruthTable};
///
/// let table = TruthTable::new("¬p").unwrap();
/// let config = TableConfig {
///     true_symbol: "1",
///     false_symbol: "0",
///     ..TableConfig::default()
/// };
/// let text = table.to_text_with_config(&config);
/// assert!(text.ends_with("1\t| 0\n0\t| 1\n"));
/// ```
#[derive(Debug, Clone)]
pub struct TableConfig {
    pub true_symbol: &'static str,
    pub false_symbol: &'static str,
    /// Show every sub-expression column instead of only the final `Output` column.
    pub show_subexpressions: bool,
    /// Width used when drawing the rule under the header.
    pub tab_width: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            true_symbol: "T",
            false_symbol: "F",
            show_subexpressions: false,
            tab_width: 8,
        }
    }
}

impl TableConfig {
    pub fn symbol(&self, value: bool) -> &'static str {
        if value {
            self.true_symbol
        } else {
            self.false_symbol
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Row {
    pub assignment: Assignment,
    /// Values of the catalogue entries, in catalogue order.
    pub values: Vec<bool>,
}

impl Row {
    /// Value of the whole formula.
    pub fn output(&self) -> bool {
        self.values.last().copied().unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
pub struct TruthTable {
    formula: String,
    variables: Vec<char>,
    catalogue: Catalogue,
    rows: Vec<Row>,
}

impl TruthTable {
    /// Parse `formula` and evaluate it, and all its sub-expressions, on every assignment.
    pub fn new(formula: &str) -> Result<Self, Error> {
        let postfix = parse(formula)?;
        let (count, variables) = variables(formula);
        let catalogue = Catalogue::new(&postfix)?;

        let rows = Assignments::new(&variables)?
            .map(|assignment| {
                let values = catalogue.evaluate(&postfix, &assignment)?;
                Ok(Row { assignment, values })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        debug!(
            "table({:?}): {} variables, {} columns, {} rows",
            formula,
            count,
            catalogue.len(),
            rows.len()
        );
        Ok(Self {
            formula: formula.to_string(),
            variables,
            catalogue,
            rows,
        })
    }

    pub fn formula(&self) -> &str {
        &self.formula
    }

    pub fn postfix(&self) -> &Postfix {
        self.catalogue.postfix()
    }

    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    pub fn labels(&self) -> &[String] {
        self.catalogue.labels()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Value of the whole formula on each row, top to bottom.
    pub fn outputs(&self) -> impl Iterator<Item = bool> + '_ {
        self.rows.iter().map(Row::output)
    }

    /// Variable names followed by sub-expression labels.
    pub fn header(&self) -> Vec<String> {
        self.variables
            .iter()
            .map(|v| v.to_string())
            .chain(self.labels().iter().cloned())
            .collect()
    }

    /// Data rows as `T` / `F` cells, aligned with [`header`][Self::header].
    pub fn records(&self) -> impl Iterator<Item = Vec<&'static str>> + '_ {
        let config = TableConfig::default();
        self.rows.iter().map(move |row| {
            row.assignment
                .values()
                .chain(row.values.iter().copied())
                .map(|value| config.symbol(value))
                .collect()
        })
    }

    /// Terminal rendering with default settings.
    pub fn to_text(&self) -> String {
        self.to_text_with_config(&TableConfig::default())
    }

    /// Tab-separated rendering: variables, a `|` separator, then either the `Output` column
    /// or every sub-expression.
    pub fn to_text_with_config(&self, config: &TableConfig) -> String {
        let mut text = String::new();
        self.write_text(&mut text, config).expect("writing to a String cannot fail");
        text
    }

    fn write_text(&self, out: &mut String, config: &TableConfig) -> std::fmt::Result {
        for var in &self.variables {
            write!(out, "{}\t", var)?;
        }
        let columns = if config.show_subexpressions {
            writeln!(out, "| {}", self.labels().join("\t"))?;
            self.labels().len()
        } else {
            writeln!(out, "| Output")?;
            1
        };
        writeln!(out, "{}", "-".repeat(config.tab_width * (self.variables.len() + columns)))?;

        for row in &self.rows {
            for value in row.assignment.values() {
                write!(out, "{}\t", config.symbol(value))?;
            }
            if config.show_subexpressions {
                let cells: Vec<&str> = row.values.iter().map(|&v| config.symbol(v)).collect();
                writeln!(out, "| {}", cells.join("\t"))?;
            } else {
                writeln!(out, "| {}", config.symbol(row.output()))?;
            }
        }
        Ok(())
    }

    /// CSV block for this formula.
    ///
    /// The block is the formula on its own row, an empty row, the header, one row per
    /// assignment, and a trailing empty row. Rows end with `\r\n`.
    pub fn to_csv_string(&self) -> String {
        let mut csv = String::new();
        write_csv_row(&mut csv, [self.formula.as_str()]);
        write_csv_row(&mut csv, std::iter::empty::<&str>());
        write_csv_row(&mut csv, self.header().iter().map(String::as_str));
        for record in self.records() {
            write_csv_row(&mut csv, record);
        }
        write_csv_row(&mut csv, std::iter::empty::<&str>());
        csv
    }

    pub fn write_csv<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_all(self.to_csv_string().as_bytes())
    }
}

fn write_csv_row<'a>(out: &mut String, fields: impl IntoIterator<Item = &'a str>) {
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&csv_field(field));
    }
    out.push_str("\r\n");
}

fn csv_field(field: &str) -> Cow<'_, str> {
    if field.contains(|c: char| matches!(c, ',' | '"' | '\r' | '\n')) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
