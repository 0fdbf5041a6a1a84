use std::fmt;

/// Errors produced while parsing or evaluating a formula.
///
/// Positions are character offsets into the original formula text for parse errors,
/// and symbol offsets into the postfix sequence for evaluation errors.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// A character that is neither a variable, an operator, nor a parenthesis.
    UnexpectedChar { ch: char, position: usize },
    /// A `)` without a matching `(`, or a `(` that is never closed.
    UnbalancedParen { position: usize },
    /// A variable with no value in the supplied assignment.
    UnboundVariable(char),
    /// The postfix sequence does not reduce to exactly one value.
    MalformedExpression { position: usize },
    /// A catalogue was asked to evaluate a postfix sequence other than its own.
    CatalogueMismatch { expected: String, actual: String },
    /// The number of variables given to the assignment enumerator disagrees with its names.
    VariableCountMismatch { count: usize, names: usize },
    /// Too many variables to enumerate assignments for.
    TooManyVariables(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnexpectedChar { ch, position } => {
                write!(f, "unexpected character '{}' at position {}", ch, position)
            }
            Error::UnbalancedParen { position } => {
                write!(f, "unbalanced parenthesis at position {}", position)
            }
            Error::UnboundVariable(name) => write!(f, "variable '{}' has no assigned value", name),
            Error::MalformedExpression { position } => {
                write!(f, "malformed postfix expression at symbol {}", position)
            }
            Error::CatalogueMismatch { expected, actual } => write!(
                f,
                "catalogue built for '{}' cannot evaluate '{}'",
                expected, actual
            ),
            Error::VariableCountMismatch { count, names } => {
                write!(f, "expected {} variables, got {} names", count, names)
            }
            Error::TooManyVariables(count) => write!(
                f,
                "cannot enumerate assignments over {} variables (at most {})",
                count,
                crate::assignment::MAX_VARIABLES
            ),
        }
    }
}

impl std::error::Error for Error {}
