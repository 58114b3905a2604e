mod error;
pub mod eval;
pub mod number;
pub mod postfix;
pub mod scan;
pub mod test_impls;
pub mod tree;

use log::debug;

pub use crate::error::CalcError;
pub use crate::eval::evaluate;
pub use crate::number::Number;
pub use crate::postfix::to_postfix;
pub use crate::scan::*;
pub use crate::tree::*;

/// Every intermediate artifact of one run through the pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trace {
    pub tokens: Vec<Token>,
    /// source span of each entry in `tokens`
    pub spans: Vec<Pos>,
    pub postfix: Vec<Token>,
    pub tree: Expr,
    pub value: Number,
}

/// text -> tokens -> postfix -> tree -> value, keeping each stage's output.
pub fn trace(line: &str) -> Result<Trace, CalcError> {
    let located = scan_with_locations(line)?;
    debug!("tokens: {:?}", located);
    let (spans, tokens): (Vec<Pos>, Vec<Token>) = located.into_iter().unzip();
    let postfix = to_postfix(&tokens)?;
    debug!("postfix: {}", format_tokens(&postfix));
    let tree = build_tree(&postfix)?.ok_or(CalcError::EmptyExpression)?;
    debug!("tree: {tree}");
    let value = evaluate(&tree)?;
    Ok(Trace {
        tokens,
        spans,
        postfix,
        tree,
        value,
    })
}

/// Evaluates a single line of integer arithmetic.
///
/// ```
/// use calc::{evaluate_expression, CalcError, Number};
///
/// assert_eq!(evaluate_expression("1 + 2 * 4"), Ok(Number::from(9)));
/// assert_eq!(evaluate_expression("7 / 2"), Ok(Number::ratio(7, 2)));
/// assert_eq!(evaluate_expression("8 / 0"), Err(CalcError::DivisionByZero));
/// ```
pub fn evaluate_expression(line: &str) -> Result<Number, CalcError> {
    Ok(trace(line)?.value)
}
