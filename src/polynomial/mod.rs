//! Dense univariate polynomials over big integers.

use std::fmt::{self, Display, Write};

use log::trace;
use num_traits::{One, Zero};

use crate::{
    big_integer::BigInteger,
    error::{Error, Result},
    gcd,
};

/// Largest exponent accepted by [`Polynomial::power`] and
/// [`Polynomial::derivative`].
pub const MAX_EXPONENT: u32 = 4096;

fn check_exponent(exponent: u32) -> Result<()> {
    if exponent > MAX_EXPONENT {
        Err(Error::InvalidExponent {
            exponent,
            max: MAX_EXPONENT,
        })
    } else {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Polynomial {
    // Index i holds the coefficient of x^i. Zero high order coefficients are
    // kept, the length is only changed by the operations themselves.
    coefficients: Vec<BigInteger>,
}

impl Polynomial {
    pub fn new(coefficients: Vec<BigInteger>) -> Self {
        Self { coefficients }
    }

    /// Builds the polynomial from coefficients in ascending order of power.
    pub fn from_coefficients<T>(coefficients: impl IntoIterator<Item = T>) -> Self
    where
        BigInteger: From<T>,
    {
        Self {
            coefficients: coefficients.into_iter().map(BigInteger::from).collect(),
        }
    }

    pub fn coefficients(&self) -> &[BigInteger] {
        &self.coefficients[..]
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Power of the highest non-zero term, or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.iter().rposition(|c| !c.is_zero())
    }

    /// The gcd of all coefficients.
    pub fn content(&self) -> BigInteger {
        gcd::gcd_of(&self.coefficients)
    }

    pub fn evaluate(&self, x: &BigInteger) -> BigInteger {
        self.coefficients
            .iter()
            .rev()
            .fold(BigInteger::zero(), |acc, c| &(&acc * x) + c)
    }

    /// Raises the polynomial to the given power by repeated multiplication.
    ///
    /// The power 0 is always `{1}`, even for an empty polynomial. Otherwise,
    /// a polynomial with `k` coefficients yields `exponent * (k - 1) + 1`
    /// coefficients.
    pub fn power(&self, exponent: u32) -> Result<Self> {
        check_exponent(exponent)?;
        if exponent == 0 {
            return Ok(Self::one());
        }

        let mut result = self.clone();
        for _ in 1..exponent {
            result = &result * self;
        }
        trace!("({})^{} = {}", self, exponent, result);

        Ok(result)
    }

    /// The derivative of the given order.
    ///
    /// An order equal to the number of coefficients leaves no coefficient at
    /// all, and a larger order yields `{0}`.
    pub fn derivative(&self, order: u32) -> Result<Self> {
        check_exponent(order)?;
        if order == 0 {
            return Ok(self.clone());
        }

        let skipped = order as usize;
        if skipped > self.coefficients.len() {
            return Ok(Self::zero());
        }

        // d^n/dx^n x^m = m·(m-1)·...·(m-n+1) x^(m-n)
        let order = u64::from(order);
        let coefficients = self.coefficients[skipped..]
            .iter()
            .zip(order..)
            .map(|(c, m)| c * &BigInteger::falling_factorial(m, order))
            .collect();

        Ok(Self { coefficients })
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Self {
            coefficients: vec![BigInteger::zero()],
        }
    }

    fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|c| c.is_zero())
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Self {
            coefficients: vec![BigInteger::one()],
        }
    }
}

impl<'a, 'b> std::ops::Add<&'b Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &'b Polynomial) -> Polynomial {
        let (long, short) = if self.len() >= rhs.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };

        let mut coefficients = long.coefficients.clone();
        for (dest, c) in coefficients.iter_mut().zip(short.coefficients.iter()) {
            *dest += c;
        }

        Polynomial { coefficients }
    }
}

impl std::ops::Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Polynomial) -> Polynomial {
        &self + &rhs
    }
}

/// Convolution of the coefficients. The product has exactly
/// `len(a) + len(b) - 1` coefficients, nothing is trimmed.
impl<'a, 'b> std::ops::Mul<&'b Polynomial> for &'a Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &'b Polynomial) -> Polynomial {
        if self.is_empty() || rhs.is_empty() {
            return Polynomial::default();
        }

        let mut coefficients = vec![BigInteger::zero(); self.len() + rhs.len() - 1];
        for (j, left) in self.coefficients.iter().enumerate() {
            for (i, right) in rhs.coefficients.iter().enumerate() {
                coefficients[i + j] += left * right;
            }
        }

        Polynomial { coefficients }
    }
}

impl std::ops::Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Polynomial) -> Polynomial {
        &self * &rhs
    }
}

fn write_term(
    f: &mut fmt::Formatter<'_>,
    coefficient: &BigInteger,
    power: usize,
) -> fmt::Result {
    let has_coef = if !coefficient.abs().is_one() || power == 0 {
        Display::fmt(coefficient, f)?;
        true
    } else {
        if coefficient.is_negative() {
            f.write_char('-')?;
        }
        false
    };

    if power > 0 {
        if has_coef {
            f.write_char('*')?;
        }
        f.write_char('x')?;
        if power > 1 {
            write!(f, "^{}", power)?;
        }
    }
    Ok(())
}

/// Terms in decreasing order of power, zero terms omitted.
impl Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self
            .coefficients
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, c)| !c.is_zero());

        match iter.next() {
            None => {
                f.write_char('0')?;
                return Ok(());
            }
            Some((power, c)) => {
                write_term(f, c, power)?;
            }
        }

        for (power, c) in iter {
            f.write_str(if c.is_negative() { " - " } else { " + " })?;
            write_term(f, &c.abs(), power)?;
        }

        Ok(())
    }
}
