pub mod big_integer;
pub mod error;
pub mod gcd;
pub mod legendre;
pub mod polynomial;

pub use big_integer::BigInteger;
pub use error::{Error, Result};
pub use legendre::{generate_ordinary, generate_shifted, Kind, LegendreCoefficients};
pub use polynomial::Polynomial;
