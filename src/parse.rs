//! Infix to postfix conversion.
//!
//! The converter is a shunting-yard over [`tokenize`]d input. An operator on the stack is
//! moved to the output only when its precedence is *strictly* greater than that of the
//! incoming operator, so chains of the same operator come out right-leaning:
//!
//! ```
//! use truth_table::parse::parse;
//!
//! let postfix = parse("p ∧ q ∧ r").unwrap();
//! assert_eq!(postfix.to_string(), "p q r ∧ ∧");
//! ```

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::error::Error;
use crate::stack::Stack;
use crate::token::{tokenize, Operator, Token};

/// Element of a postfix sequence. Parentheses never survive conversion.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Symbol {
    Var(char),
    Op(Operator),
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Var(name) => write!(f, "{}", name),
            Symbol::Op(op) => write!(f, "{}", op),
        }
    }
}

/// A formula in Reverse Polish order.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Postfix {
    symbols: Vec<Symbol>,
}

impl Postfix {
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Number of operator applications a replay of this sequence performs.
    pub fn operator_count(&self) -> usize {
        self.symbols
            .iter()
            .filter(|s| matches!(s, Symbol::Op(_)))
            .count()
    }
}

impl From<Vec<Symbol>> for Postfix {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

impl FromStr for Postfix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Operator stack entry: either a pending operator or an open group marker.
#[derive(Debug, Copy, Clone)]
enum Pending {
    Op(Operator),
    Group,
}

/// Convert an infix formula to postfix.
pub fn parse(formula: &str) -> Result<Postfix, Error> {
    let tokens = tokenize(formula)?;
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Stack<(usize, Pending)> = Stack::new();

    for (position, token) in tokens {
        match token {
            Token::Var(name) => output.push(Symbol::Var(name)),
            Token::Op(op) => {
                while let Some(&(_, Pending::Op(top))) = stack.peek() {
                    if top.precedence() <= op.precedence() {
                        break;
                    }
                    stack.pop();
                    output.push(Symbol::Op(top));
                }
                stack.push((position, Pending::Op(op)));
            }
            Token::LeftParen => stack.push((position, Pending::Group)),
            Token::RightParen => loop {
                match stack.pop() {
                    Some((_, Pending::Op(top))) => output.push(Symbol::Op(top)),
                    Some((_, Pending::Group)) => break,
                    None => return Err(Error::UnbalancedParen { position }),
                }
            },
        }
    }

    while let Some((position, pending)) = stack.pop() {
        match pending {
            Pending::Op(op) => output.push(Symbol::Op(op)),
            Pending::Group => return Err(Error::UnbalancedParen { position }),
        }
    }

    let postfix = Postfix::from(output);
    debug!("parse({:?}) -> {}", formula, postfix);
    Ok(postfix)
}
