//! Prints generated coefficients in the layout of the published tables:
//!
//! ```text
//! P(2,x) = 1/2 ( 3 x^2 - 1 )
//! /P(2,x) = 6 x^2 - 6 x + 1
//! ```
//!
//! Terms go from the highest power down and zero terms are skipped. The
//! magnitude 1 is omitted except in the constant term, and the `1/prefix ( )`
//! wrapper only appears when the prefix is not 1.

use std::fmt::{self, Display, Write};

use itertools::Itertools;
use num_traits::One;

use super::{Coefficient, LegendreCoefficients};

struct Term<'a> {
    coefficient: &'a Coefficient,
    power: usize,
    leading: bool,
}

impl Display for Term<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let negative = self.coefficient.is_negative();
        if !self.leading {
            f.write_str(if negative { "- " } else { "+ " })?;
        } else if negative {
            f.write_char('-')?;
        }

        let magnitude = self.coefficient.magnitude();
        let has_magnitude = !magnitude.is_one() || self.power == 0;
        if has_magnitude {
            write!(f, "{}", magnitude)?;
        }

        if self.power > 0 {
            if has_magnitude {
                f.write_char(' ')?;
            }
            f.write_char('x')?;
            if self.power > 1 {
                write!(f, "^{}", self.power)?;
            }
        }

        Ok(())
    }
}

pub(super) fn write_line(dest: &mut impl Write, line: &LegendreCoefficients) -> fmt::Result {
    write!(dest, "{}({},x) = ", line.kind().symbol(), line.degree())?;

    let highest = line.coefficients().len().saturating_sub(1);
    let body = line
        .coefficients()
        .iter()
        .enumerate()
        .rev()
        .filter(|(_, c)| !c.is_zero())
        .map(|(power, coefficient)| Term {
            coefficient,
            power,
            leading: power == highest,
        })
        .format(" ");

    if line.prefix().is_one() {
        write!(dest, "{}", body)
    } else {
        write!(dest, "1/{} ( {} )", line.prefix(), body)
    }
}

/// Renders one table line, without line terminator.
pub fn render(line: &LegendreCoefficients) -> String {
    line.to_string()
}
