use std::fmt;

use crate::scan::{Operator, Token};
use crate::CalcError;

/// Binary expression tree. Each node exclusively owns its children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    /// non-empty string of ascii digits
    Leaf(String),
    Binary {
        op: Operator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn leaf(digits: impl ToString) -> Expr {
        Expr::Leaf(digits.to_string())
    }

    pub fn binary(op: Operator, left: Expr, right: Expr) -> Expr {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            Expr::Leaf(_) => 1,
            Expr::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Leaf(digits) => write!(f, "{digits}"),
            Expr::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
        }
    }
}

/// Deepest tree `build_tree` will produce, counted as `Expr::depth`.
///
/// Evaluating, printing and dropping a tree all recurse once per level, so
/// the limit keeps a long operator chain from exhausting the thread's stack.
pub const MAX_DEPTH: usize = 1000;

/// Builds a tree from postfix tokens. `Ok(None)` means there was nothing to build.
pub fn build_tree(postfix: &[Token]) -> Result<Option<Expr>, CalcError> {
    // each subtree alongside its depth
    let mut stack: Vec<(Expr, usize)> = Vec::new();

    for token in postfix {
        match token {
            Token::Number(digits) => stack.push((Expr::leaf(digits), 1)),
            Token::Operator(op) => {
                let (right, rd) = stack.pop().ok_or(CalcError::MalformedExpression)?;
                let (left, ld) = stack.pop().ok_or(CalcError::MalformedExpression)?;
                let depth = 1 + ld.max(rd);
                if depth > MAX_DEPTH {
                    return Err(CalcError::TooDeep(MAX_DEPTH));
                }
                stack.push((Expr::binary(*op, left, right), depth));
            }
            Token::LP | Token::RP => return Err(CalcError::MalformedExpression),
        }
    }

    let root = stack.pop();
    if !stack.is_empty() {
        return Err(CalcError::MalformedExpression);
    }
    Ok(root.map(|(expr, _)| expr))
}
