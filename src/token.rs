//! Single-character tokens of a propositional formula.
//!
//! Every token is exactly one character: a variable is one ASCII letter, an operator is one
//! of `¬ ∧ ∨ ⇒ ⇔`, and parentheses group. Whitespace carries no meaning.

use std::fmt;

use crate::error::Error;

/// Logical connective.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Operator {
    Not,
    And,
    Or,
    Implies,
    Iff,
}

impl Operator {
    /// All operators, from the tightest binding to the loosest.
    pub const ALL: [Operator; 5] = [
        Operator::Not,
        Operator::And,
        Operator::Or,
        Operator::Implies,
        Operator::Iff,
    ];

    /// Canonical symbol used both in input and in reconstructed labels.
    pub const fn symbol(self) -> char {
        match self {
            Operator::Not => '¬',
            Operator::And => '∧',
            Operator::Or => '∨',
            Operator::Implies => '⇒',
            Operator::Iff => '⇔',
        }
    }

    /// Binding strength. Higher binds tighter.
    ///
    /// ```text
    /// ¬ (5) > ∧ (4) > ∨ (3) > ⇒ (2) > ⇔ (1)
    /// ```
    pub const fn precedence(self) -> u8 {
        match self {
            Operator::Not => 5,
            Operator::And => 4,
            Operator::Or => 3,
            Operator::Implies => 2,
            Operator::Iff => 1,
        }
    }

    pub const fn is_unary(self) -> bool {
        matches!(self, Operator::Not)
    }

    pub fn from_symbol(ch: char) -> Option<Self> {
        Operator::ALL.into_iter().find(|op| op.symbol() == ch)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Token {
    Var(char),
    Op(Operator),
    LeftParen,
    RightParen,
}

impl Token {
    /// Classify a single character, or `None` if it is not part of the language.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '(' => Some(Token::LeftParen),
            ')' => Some(Token::RightParen),
            _ if is_variable_char(ch) => Some(Token::Var(ch)),
            _ => Operator::from_symbol(ch).map(Token::Op),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Var(name) => write!(f, "{}", name),
            Token::Op(op) => write!(f, "{}", op),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
        }
    }
}

fn is_variable_char(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

/// Whether `token` is a propositional variable: exactly one letter.
pub fn is_variable(token: &str) -> bool {
    single_char(token).is_some_and(is_variable_char)
}

/// Whether `token` is exactly one of the five operator symbols.
pub fn is_operator(token: &str) -> bool {
    single_char(token).and_then(Operator::from_symbol).is_some()
}

/// Split a formula into tokens, skipping whitespace.
///
/// Each token is paired with its character offset in `formula`.
pub fn tokenize(formula: &str) -> Result<Vec<(usize, Token)>, Error> {
    formula
        .chars()
        .enumerate()
        .filter(|(_, ch)| !ch.is_whitespace())
        .map(|(position, ch)| match Token::from_char(ch) {
            Some(token) => Ok((position, token)),
            None => Err(Error::UnexpectedChar { ch, position }),
        })
        .collect()
}
