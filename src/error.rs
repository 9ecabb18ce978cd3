use thiserror::Error;

use crate::big_integer::BigInteger;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("division by zero")]
    DivisionByZero,

    #[error("exponent {exponent} is out of the supported range 0..={max}")]
    InvalidExponent { exponent: u32, max: u32 },

    /// Raised when a quotient that must be exact leaves a remainder.
    #[error("{dividend} is not evenly divisible by {divisor}")]
    InexactDivision {
        dividend: BigInteger,
        divisor: BigInteger,
    },

    #[error("invalid integer literal: {0}")]
    Parse(String),
}
