use num_traits::Zero;

use crate::big_integer::BigInteger;

/// Euclid's algorithm. For signed types the sign of the result follows the
/// remainder convention of `T`, so pass absolute values if that matters.
pub fn gcd<T>(mut bigger: T, mut smaller: T) -> T
where
    T: Zero + for<'a> std::ops::Rem<&'a T, Output = T>,
{
    while !smaller.is_zero() {
        let tmp = bigger % &smaller;
        bigger = smaller;
        smaller = tmp;
    }
    bigger
}

/// Folds the gcd over all the values. The gcd of an empty sequence is zero,
/// the identity of the operation.
pub fn gcd_of<'a>(values: impl IntoIterator<Item = &'a BigInteger>) -> BigInteger {
    values
        .into_iter()
        .fold(BigInteger::zero(), |acc, value| acc.gcd(value))
}
