use std::fmt;

use itertools::Itertools;

use crate::CalcError;

/// inclusive character span of a token within its line
pub type Pos = (usize, usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Times,
    Divide,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Operator> {
        Some(match c {
            '+' => Operator::Plus,
            '-' => Operator::Minus,
            '*' => Operator::Times,
            '/' => Operator::Divide,
            _ => return None,
        })
    }

    pub const fn symbol(self) -> char {
        match self {
            Operator::Plus => '+',
            Operator::Minus => '-',
            Operator::Times => '*',
            Operator::Divide => '/',
        }
    }

    /// Binding strength used by the shunting-yard conversion; higher binds tighter.
    /// All operators are left-associative.
    pub const fn precedence(self) -> u8 {
        match self {
            Operator::Plus | Operator::Minus => 1,
            Operator::Times | Operator::Divide => 2,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// one or more ascii digits, parsed during evaluation
    Number(String),
    Operator(Operator),
    LP,
    RP,
}

impl Token {
    pub fn number(digits: impl ToString) -> Token {
        Token::Number(digits.to_string())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(digits) => write!(f, "{digits}"),
            Token::Operator(op) => write!(f, "{op}"),
            Token::LP => write!(f, "("),
            Token::RP => write!(f, ")"),
        }
    }
}

/// space separated rendering, e.g. `1 2 4 * +`
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens.iter().join(" ")
}

pub fn scan(sentence: &str) -> Result<Vec<Token>, CalcError> {
    Ok(scan_with_locations(sentence)?
        .into_iter()
        .map(|(_, token)| token)
        .collect())
}

pub fn scan_with_locations(sentence: &str) -> Result<Vec<(Pos, Token)>, CalcError> {
    let mut tokens: Vec<(Pos, Token)> = Vec::new();
    // start index and digits of the number being accumulated
    let mut pending: Option<(usize, String)> = None;

    for (i, c) in sentence.chars().enumerate() {
        match c {
            '0'..='9' => pending.get_or_insert_with(|| (i, String::new())).1.push(c),
            ' ' => flush_number(&mut tokens, &mut pending, i),
            '(' => {
                flush_number(&mut tokens, &mut pending, i);
                tokens.push(((i, i), Token::LP));
            }
            ')' => {
                flush_number(&mut tokens, &mut pending, i);
                tokens.push(((i, i), Token::RP));
            }
            c => {
                let op = Operator::from_char(c).ok_or(CalcError::InvalidCharacter(c, i))?;
                flush_number(&mut tokens, &mut pending, i);
                tokens.push(((i, i), Token::Operator(op)));
            }
        }
    }
    flush_number(&mut tokens, &mut pending, sentence.chars().count());

    Ok(tokens)
}

fn flush_number(tokens: &mut Vec<(Pos, Token)>, pending: &mut Option<(usize, String)>, end: usize) {
    if let Some((start, digits)) = pending.take() {
        tokens.push(((start, end - 1), Token::Number(digits)));
    }
}

#[cfg(test)]
mod tests {
    use super::Operator::*;
    use super::{format_tokens, scan, scan_with_locations, Token};
    use crate::CalcError;

    #[test]
    fn spaced() {
        assert_eq!(
            scan("1 + 2 * 4").unwrap(),
            [
                Token::number("1"),
                Token::Operator(Plus),
                Token::number("2"),
                Token::Operator(Times),
                Token::number("4"),
            ]
        );
    }

    #[test]
    fn not_spaced() {
        assert_eq!(
            scan("(12+3)/45").unwrap(),
            [
                Token::LP,
                Token::number("12"),
                Token::Operator(Plus),
                Token::number("3"),
                Token::RP,
                Token::Operator(Divide),
                Token::number("45"),
            ]
        );
    }

    #[test]
    fn numbers_do_not_span_spaces() {
        assert_eq!(scan("12 34").unwrap(), [Token::number("12"), Token::number("34")]);
    }

    #[test]
    fn only_spaces() {
        assert!(scan("").unwrap().is_empty());
        assert!(scan("   ").unwrap().is_empty());
    }

    #[test]
    fn other_whitespace_is_invalid() {
        assert_eq!(scan("1\t+ 2"), Err(CalcError::InvalidCharacter('\t', 1)));
        assert_eq!(scan("1 + 2\n"), Err(CalcError::InvalidCharacter('\n', 5)));
        assert_eq!(scan("\u{a0}"), Err(CalcError::InvalidCharacter('\u{a0}', 0)));
    }

    #[test]
    fn invalid() {
        assert_eq!(scan("1 @ 2"), Err(CalcError::InvalidCharacter('@', 2)));
        assert_eq!(scan("1.5"), Err(CalcError::InvalidCharacter('.', 1)));
        assert_eq!(scan("x"), Err(CalcError::InvalidCharacter('x', 0)));
        // columns count chars, not bytes
        assert_eq!(scan("й + й"), Err(CalcError::InvalidCharacter('й', 0)));
        assert_eq!(scan("2 + й"), Err(CalcError::InvalidCharacter('й', 4)));
    }

    #[test]
    fn locations() {
        let located = scan_with_locations(" 10-(2)").unwrap();
        let spans: Vec<_> = located.iter().map(|(pos, _)| *pos).collect();
        assert_eq!(spans, [(1, 2), (3, 3), (4, 4), (5, 5), (6, 6)]);
        assert_eq!(located[0].1, Token::number("10"));
    }

    #[test]
    fn trailing_number_span() {
        let located = scan_with_locations("1+234").unwrap();
        assert_eq!(located.last().unwrap().0, (2, 4));
    }

    #[test]
    fn display() {
        assert_eq!("( 1 + 2 ) * 4", format_tokens(&scan("(1+2)*4").unwrap()));
    }

    #[test]
    fn precedence_table() {
        assert_eq!(Plus.precedence(), Minus.precedence());
        assert_eq!(Times.precedence(), Divide.precedence());
        assert!(Times.precedence() > Plus.precedence());
    }
}
