use std::fmt;

use num::{BigInt, BigRational};
use num_traits::{ToPrimitive, Zero};

use crate::CalcError;

/// An exact result. Integers stay integers; division produces a rational in
/// lowest terms rather than truncating.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Number(BigRational);

impl Number {
    pub fn ratio(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Number {
        Number(BigRational::new(numer.into(), denom.into()))
    }

    /// `digits` must be a non-empty run of ascii digits
    pub fn parse_digits(digits: &str) -> Result<Number, CalcError> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CalcError::MalformedExpression);
        }
        let int: BigInt = digits
            .parse()
            .map_err(|_| CalcError::MalformedExpression)?;
        Ok(Number(BigRational::from_integer(int)))
    }

    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// `None` for non-integers and for integers outside the i64 range
    pub fn to_i64(&self) -> Option<i64> {
        if self.is_integer() {
            self.0.numer().to_i64()
        } else {
            None
        }
    }

    pub fn to_f64(&self) -> Option<f64> {
        self.0.to_f64()
    }

    pub fn add(&self, rhs: &Number) -> Number {
        Number(&self.0 + &rhs.0)
    }

    pub fn sub(&self, rhs: &Number) -> Number {
        Number(&self.0 - &rhs.0)
    }

    pub fn mul(&self, rhs: &Number) -> Number {
        Number(&self.0 * &rhs.0)
    }

    pub fn checked_div(&self, rhs: &Number) -> Result<Number, CalcError> {
        if rhs.is_zero() {
            return Err(CalcError::DivisionByZero);
        }
        Ok(Number(&self.0 / &rhs.0))
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Number(BigRational::from_integer(v.into()))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.0.numer())
        } else {
            // BigRational keeps the sign on the numerator
            write!(f, "{}/{}", self.0.numer(), self.0.denom())
        }
    }
}
