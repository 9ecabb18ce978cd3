//! Integer coefficients of the Legendre polynomials of the first kind
//! (Adrien-Marie Legendre, 1752-1833), generated with Rodrigues' formula:
//!
//! ```text
//!              1      d^n
//!   P(n,x) = ------ * ---- [ (x^2 - 1)^n ]
//!            2^n n!   dx^n
//!
//!              1   d^n
//!  /P(n,x) = --- * ---- [ (x^2 - x)^n ]
//!             n!  dx^n
//! ```
//!
//! The second one is the shifted variant, orthogonal on [0, 1].

pub mod render;

use std::fmt::Display;

use log::debug;

use crate::{big_integer::BigInteger, error::Result, polynomial::Polynomial};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Ordinary,
    Shifted,
}

impl Kind {
    /// The polynomial raised to the n-th power in Rodrigues' formula.
    fn base(self) -> Polynomial {
        match self {
            // x^2 - 1
            Kind::Ordinary => Polynomial::from_coefficients([-1i32, 0, 1]),
            // x^2 - x
            Kind::Shifted => Polynomial::from_coefficients([0i32, -1, 1]),
        }
    }

    /// The denominator in Rodrigues' formula.
    fn normalization(self, degree: u32) -> BigInteger {
        match self {
            Kind::Ordinary => BigInteger::pow2(degree) * BigInteger::factorial(degree),
            Kind::Shifted => BigInteger::factorial(degree),
        }
    }

    /// Name used when printing, `P` or `/P`.
    pub fn symbol(self) -> &'static str {
        match self {
            Kind::Ordinary => "P",
            Kind::Shifted => "/P",
        }
    }
}

/// A reduced coefficient, with the sign kept apart from the magnitude.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coefficient {
    magnitude: BigInteger,
    negative: bool,
}

impl Coefficient {
    pub fn magnitude(&self) -> &BigInteger {
        &self.magnitude
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_zero(&self) -> bool {
        num_traits::Zero::is_zero(&self.magnitude)
    }

    /// The signed value.
    pub fn value(&self) -> BigInteger {
        if self.negative {
            -&self.magnitude
        } else {
            self.magnitude.clone()
        }
    }
}

/// The polynomial `1/prefix * Σ coefficients[i] x^i`, where prefix and the
/// coefficients share no common factor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendreCoefficients {
    kind: Kind,
    degree: u32,
    prefix: BigInteger,
    coefficients: Vec<Coefficient>,
}

impl LegendreCoefficients {
    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Denominator left after the reduction, 1 if there is none.
    pub fn prefix(&self) -> &BigInteger {
        &self.prefix
    }

    /// Coefficients in ascending order of power.
    pub fn coefficients(&self) -> &[Coefficient] {
        &self.coefficients[..]
    }

    /// The reduced numerator as a polynomial with signed coefficients.
    pub fn numerator(&self) -> Polynomial {
        Polynomial::new(self.coefficients.iter().map(Coefficient::value).collect())
    }
}

impl Display for LegendreCoefficients {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        render::write_line(f, self)
    }
}

/// Generates the reduced coefficients of the Legendre polynomial of the given
/// kind and degree.
pub fn generate(kind: Kind, degree: u32) -> Result<LegendreCoefficients> {
    let power = kind.base().power(degree)?;
    let derivative = power.derivative(degree)?;
    let factor = kind.normalization(degree);

    let gcd = factor.gcd(&derivative.content());
    debug!(
        "{}({},x): d^n/dx^n = {}, factor = {}, gcd = {}",
        kind.symbol(),
        degree,
        derivative,
        factor,
        gcd
    );

    let prefix = factor.exact_div(&gcd)?;
    let coefficients = derivative
        .coefficients()
        .iter()
        .map(|c| {
            Ok(Coefficient {
                magnitude: c.abs().exact_div(&gcd)?,
                negative: c.is_negative(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(LegendreCoefficients {
        kind,
        degree,
        prefix,
        coefficients,
    })
}

/// Coefficients of P(n,x), the Legendre polynomial on [-1, 1].
pub fn generate_ordinary(degree: u32) -> Result<LegendreCoefficients> {
    generate(Kind::Ordinary, degree)
}

/// Coefficients of /P(n,x), the shifted Legendre polynomial on [0, 1].
pub fn generate_shifted(degree: u32) -> Result<LegendreCoefficients> {
    generate(Kind::Shifted, degree)
}
