use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    /// the offending character and its column, counted in chars
    #[error("invalid character: {0:?} at column {1}")]
    InvalidCharacter(char, usize),
    #[error("mismatched parenthesis")]
    MismatchedParenthesis,
    #[error("malformed expression: operators and operands do not balance")]
    MalformedExpression,
    #[error("division by zero")]
    DivisionByZero,
    #[error("empty expression")]
    EmptyExpression,
    #[error("expression nests deeper than {0} levels")]
    TooDeep(usize),
}

impl CalcError {
    /// finds the first `CalcError` in an anyhow chain, if any
    pub fn extract(err: &anyhow::Error) -> Option<&CalcError> {
        err.chain().find_map(|e| e.downcast_ref::<CalcError>())
    }
}
