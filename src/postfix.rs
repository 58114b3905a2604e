use log::trace;

use crate::scan::Token;
use crate::CalcError;

/// Reorders infix tokens into postfix using the shunting-yard algorithm.
///
/// Operators of equal precedence are popped before the incoming one is pushed,
/// which makes every operator left-associative: `1 - 2 - 3` becomes `1 2 - 3 -`.
/// Operand/operator balance is not checked here; the tree builder rejects it.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, CalcError> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut operators: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) => output.push(token.clone()),
            Token::Operator(op) => {
                while let Some(Token::Operator(top)) = operators.last() {
                    if op.precedence() > top.precedence() {
                        break;
                    }
                    trace!("{op} yields to {top}");
                    output.extend(operators.pop());
                }
                operators.push(token.clone());
            }
            Token::LP => operators.push(Token::LP),
            Token::RP => loop {
                match operators.pop() {
                    Some(Token::LP) => break,
                    Some(other) => output.push(other),
                    None => return Err(CalcError::MismatchedParenthesis),
                }
            },
        }
    }

    while let Some(token) = operators.pop() {
        if token == Token::LP {
            // an open paren that was never closed
            return Err(CalcError::MismatchedParenthesis);
        }
        output.push(token);
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::to_postfix;
    use crate::scan::{format_tokens, scan};
    use crate::CalcError;

    fn postfix(sentence: &str) -> Result<String, CalcError> {
        Ok(format_tokens(&to_postfix(&scan(sentence)?)?))
    }

    #[test]
    fn precedence() {
        assert_eq!("1 2 4 * +", postfix("1 + 2 * 4").unwrap());
        assert_eq!("1 2 * 4 +", postfix("1 * 2 + 4").unwrap());
        assert_eq!("8 2 / 3 -", postfix("8 / 2 - 3").unwrap());
    }

    #[test]
    fn left_associative() {
        assert_eq!("10 3 - 2 -", postfix("10 - 3 - 2").unwrap());
        assert_eq!("8 4 / 2 /", postfix("8 / 4 / 2").unwrap());
        assert_eq!("8 4 / 2 *", postfix("8 / 4 * 2").unwrap());
    }

    #[test]
    fn parens() {
        assert_eq!("1 2 + 4 *", postfix("(1 + 2) * 4").unwrap());
        assert_eq!("10 3 2 - -", postfix("10 - (3 - 2)").unwrap());
        assert_eq!("7", postfix("((7))").unwrap());
    }

    #[test]
    fn unbalanced_operands_pass_through() {
        assert_eq!("1 +", postfix("1 +").unwrap());
        assert_eq!("1 2", postfix("1 2").unwrap());
    }

    #[test]
    fn mismatched() {
        assert_eq!(postfix("1 + 2)"), Err(CalcError::MismatchedParenthesis));
        assert_eq!(postfix(")"), Err(CalcError::MismatchedParenthesis));
        assert_eq!(postfix("(1 + 2"), Err(CalcError::MismatchedParenthesis));
    }

    #[test]
    fn empty() {
        assert!(to_postfix(&[]).unwrap().is_empty());
    }
}
