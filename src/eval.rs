use crate::assignment::Assignment;
use crate::ast::Expr;
use crate::catalogue::Catalogue;
use crate::error::Error;
use crate::parse::{Postfix, Symbol};
use crate::stack::Stack;

impl Postfix {
    /// Replay the sequence bottom-up, feeding each node to `collapse` with its children
    /// already collapsed.
    ///
    /// Nodes are visited in sequence order, so two replays of the same `Postfix` see the
    /// operator applications in the same order. Fails with
    /// [`MalformedExpression`][Error::MalformedExpression] if an operator lacks operands or
    /// the sequence does not reduce to exactly one result.
    pub fn collapse<R, F>(&self, mut collapse: F) -> Result<R, Error>
    where
        F: FnMut(Expr<char, R>) -> Result<R, Error>,
    {
        let mut stack: Stack<R> = Stack::with_capacity(self.len());

        for (position, &symbol) in self.symbols().iter().enumerate() {
            let expr = match symbol {
                Symbol::Var(name) => Expr::Var(name),
                Symbol::Op(op) if op.is_unary() => {
                    let [operand] = stack
                        .pop_n::<1>()
                        .ok_or(Error::MalformedExpression { position })?;
                    Expr::Not(operand)
                }
                Symbol::Op(op) => {
                    let [lhs, rhs] = stack
                        .pop_n::<2>()
                        .ok_or(Error::MalformedExpression { position })?;
                    Expr::binary(op, lhs, rhs)
                }
            };
            stack.push(collapse(expr)?);
        }

        match stack.pop_n::<1>() {
            Some([result]) if stack.is_empty() => Ok(result),
            _ => Err(Error::MalformedExpression {
                position: self.len(),
            }),
        }
    }

    /// Value of the whole formula under `assignment`.
    pub fn eval(&self, assignment: &Assignment) -> Result<bool, Error> {
        self.collapse(|expr| expr.eval(|name| lookup(assignment, name)))
    }
}

pub(crate) fn lookup(assignment: &Assignment, name: char) -> Result<bool, Error> {
    assignment.get(name).ok_or(Error::UnboundVariable(name))
}

/// Values of every sub-expression of `postfix` under `assignment`, aligned with
/// [`catalogue`][crate::catalogue::catalogue].
///
/// This rebuilds the catalogue on every call; use [`Catalogue::evaluate`] when evaluating
/// the same formula many times.
pub fn evaluate(postfix: &Postfix, assignment: &Assignment) -> Result<Vec<bool>, Error> {
    Catalogue::new(postfix)?.evaluate(postfix, assignment)
}
