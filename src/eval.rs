use crate::number::Number;
use crate::scan::Operator;
use crate::tree::Expr;
use crate::CalcError;

/// Recursively evaluates a tree bottom-up. Pure; the tree is only borrowed.
pub fn evaluate(tree: &Expr) -> Result<Number, CalcError> {
    match tree {
        Expr::Leaf(digits) => Number::parse_digits(digits),
        Expr::Binary { op, left, right } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            apply(*op, &left, &right)
        }
    }
}

fn apply(op: Operator, left: &Number, right: &Number) -> Result<Number, CalcError> {
    Ok(match op {
        Operator::Plus => left.add(right),
        Operator::Minus => left.sub(right),
        Operator::Times => left.mul(right),
        Operator::Divide => left.checked_div(right)?,
    })
}
