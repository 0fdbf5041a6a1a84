use crate::token::Operator;

/// One level of a propositional expression.
///
/// `T` is the leaf payload and `A` stands for already-processed children, so the same
/// node type serves both the symbolic and the boolean replay of a postfix sequence.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Expr<T, A> {
    Var(T),
    Not(A),
    And(A, A),
    Or(A, A),
    Implies(A, A),
    Iff(A, A),
}

impl<T, A> Expr<T, A> {
    /// Build a binary node.
    ///
    /// # Panics
    ///
    /// Panics if `op` is [`Operator::Not`].
    pub fn binary(op: Operator, lhs: A, rhs: A) -> Self {
        match op {
            Operator::And => Expr::And(lhs, rhs),
            Operator::Or => Expr::Or(lhs, rhs),
            Operator::Implies => Expr::Implies(lhs, rhs),
            Operator::Iff => Expr::Iff(lhs, rhs),
            Operator::Not => panic!("negation is not a binary operator"),
        }
    }

    /// The connective at this node, or `None` for a variable.
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Expr::Var(_) => None,
            Expr::Not(_) => Some(Operator::Not),
            Expr::And(..) => Some(Operator::And),
            Expr::Or(..) => Some(Operator::Or),
            Expr::Implies(..) => Some(Operator::Implies),
            Expr::Iff(..) => Some(Operator::Iff),
        }
    }

    #[inline(always)]
    pub fn fmap<B, F>(self, mut f: F) -> Expr<T, B>
    where
        F: FnMut(A) -> B,
    {
        match self {
            Expr::Var(t) => Expr::Var(t),
            Expr::Not(a) => Expr::Not(f(a)),
            Expr::And(a, b) => Expr::And(f(a), f(b)),
            Expr::Or(a, b) => Expr::Or(f(a), f(b)),
            Expr::Implies(a, b) => Expr::Implies(f(a), f(b)),
            Expr::Iff(a, b) => Expr::Iff(f(a), f(b)),
        }
    }
}

impl<T> Expr<T, bool> {
    /// Apply the connective to already evaluated operands.
    ///
    /// Variables are resolved by `lookup`.
    pub fn eval<E, F>(self, lookup: F) -> Result<bool, E>
    where
        F: FnOnce(T) -> Result<bool, E>,
    {
        Ok(match self {
            Expr::Var(t) => return lookup(t),
            Expr::Not(a) => !a,
            Expr::And(a, b) => a && b,
            Expr::Or(a, b) => a || b,
            Expr::Implies(a, b) => !a || b,
            Expr::Iff(a, b) => a == b,
        })
    }
}
