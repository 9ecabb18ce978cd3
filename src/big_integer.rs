//! Signed integers of unbounded magnitude.
//!
//! The magnitude is stored as little-endian base 2^32 limbs. Every value is
//! kept in canonical form: the most significant limb is never zero, and zero
//! is the empty limb sequence with a non-negative sign.

use std::{
    cmp::Ordering,
    fmt::{self, Display, Write},
    ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Rem, Sub, SubAssign},
    str::FromStr,
};

use num_traits::{Num, One, Pow, Signed, ToPrimitive, Zero};

use crate::error::{Error, Result};

type Limb = u32;
type DoubleLimb = u64;

const LIMB_BITS: u32 = Limb::BITS;

/// Largest power of ten that fits in a limb, used to print in decimal.
const DECIMAL_CHUNK: Limb = 1_000_000_000;
const DECIMAL_CHUNK_DIGITS: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BigInteger {
    negative: bool,
    // Least significant limb first.
    limbs: Vec<Limb>,
}

fn trim(limbs: &mut Vec<Limb>) {
    while limbs.last() == Some(&0) {
        limbs.pop();
    }
}

fn cmp_magnitude(a: &[Limb], b: &[Limb]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

fn add_magnitude(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut result = Vec::with_capacity(long.len() + 1);
    let mut carry: DoubleLimb = 0;
    for (i, &limb) in long.iter().enumerate() {
        let sum = limb as DoubleLimb + short.get(i).copied().unwrap_or(0) as DoubleLimb + carry;
        result.push(sum as Limb);
        carry = sum >> LIMB_BITS;
    }
    if carry != 0 {
        result.push(carry as Limb);
    }

    result
}

/// Computes a - b, where the magnitude of a must not be smaller than b's.
fn sub_magnitude(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    debug_assert!(cmp_magnitude(a, b) != Ordering::Less);

    let mut result = Vec::with_capacity(a.len());
    let mut borrow = false;
    for (i, &limb) in a.iter().enumerate() {
        let (diff, b1) = limb.overflowing_sub(b.get(i).copied().unwrap_or(0));
        let (diff, b2) = diff.overflowing_sub(borrow as Limb);
        result.push(diff);
        borrow = b1 || b2;
    }
    trim(&mut result);

    result
}

/// Schoolbook multiplication.
fn mul_magnitude(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut result = vec![0; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        let mut carry: DoubleLimb = 0;
        for (j, &y) in b.iter().enumerate() {
            // Can't overflow: (2^32-1)^2 + 2*(2^32-1) == 2^64-1
            let t = result[i + j] as DoubleLimb + x as DoubleLimb * y as DoubleLimb + carry;
            result[i + j] = t as Limb;
            carry = t >> LIMB_BITS;
        }
        result[i + b.len()] = carry as Limb;
    }
    trim(&mut result);

    result
}

/// In place limbs = limbs * factor + addend.
fn mul_add_small(limbs: &mut Vec<Limb>, factor: Limb, addend: Limb) {
    let mut carry = addend as DoubleLimb;
    for limb in limbs.iter_mut() {
        let t = *limb as DoubleLimb * factor as DoubleLimb + carry;
        *limb = t as Limb;
        carry = t >> LIMB_BITS;
    }
    if carry != 0 {
        limbs.push(carry as Limb);
    }
    trim(limbs);
}

fn div_rem_small(a: &[Limb], divisor: Limb) -> (Vec<Limb>, Limb) {
    let mut quotient = vec![0; a.len()];
    let mut rem: DoubleLimb = 0;
    for (i, &limb) in a.iter().enumerate().rev() {
        let current = (rem << LIMB_BITS) | limb as DoubleLimb;
        quotient[i] = (current / divisor as DoubleLimb) as Limb;
        rem = current % divisor as DoubleLimb;
    }
    trim(&mut quotient);

    (quotient, rem as Limb)
}

/// Shifts left by one bit, shifting in `low_bit` at the bottom.
fn shl1(limbs: &mut Vec<Limb>, low_bit: Limb) {
    let mut carry = low_bit;
    for limb in limbs.iter_mut() {
        let next = *limb >> (LIMB_BITS - 1);
        *limb = (*limb << 1) | carry;
        carry = next;
    }
    if carry != 0 {
        limbs.push(carry);
    }
}

/// Quotient and remainder of the magnitudes. `divisor` must not be zero.
fn div_rem_magnitude(a: &[Limb], divisor: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    if cmp_magnitude(a, divisor) == Ordering::Less {
        return (Vec::new(), a.to_vec());
    }

    if let [single] = divisor {
        let (quotient, rem) = div_rem_small(a, *single);
        let mut rem = vec![rem];
        trim(&mut rem);
        return (quotient, rem);
    }

    // Restoring binary long division, one bit at a time.
    let mut quotient = vec![0; a.len()];
    let mut rem = Vec::with_capacity(divisor.len() + 1);
    for bit in (0..a.len() * LIMB_BITS as usize).rev() {
        let limb = bit / LIMB_BITS as usize;
        let offset = bit % LIMB_BITS as usize;

        shl1(&mut rem, (a[limb] >> offset) & 1);
        if cmp_magnitude(&rem, divisor) != Ordering::Less {
            rem = sub_magnitude(&rem, divisor);
            quotient[limb] |= 1 << offset;
        }
    }
    trim(&mut quotient);

    (quotient, rem)
}

/// Sum of two signed magnitudes.
fn signed_add(a_negative: bool, a: &[Limb], b_negative: bool, b: &[Limb]) -> BigInteger {
    if a_negative == b_negative {
        BigInteger::from_parts(a_negative, add_magnitude(a, b))
    } else {
        match cmp_magnitude(a, b) {
            Ordering::Less => BigInteger::from_parts(b_negative, sub_magnitude(b, a)),
            _ => BigInteger::from_parts(a_negative, sub_magnitude(a, b)),
        }
    }
}

impl BigInteger {
    fn from_parts(negative: bool, mut limbs: Vec<Limb>) -> Self {
        trim(&mut limbs);
        Self {
            negative: negative && !limbs.is_empty(),
            limbs,
        }
    }

    fn magnitude(&self) -> u128 {
        self.limbs
            .iter()
            .rev()
            .fold(0u128, |acc, &limb| (acc << LIMB_BITS) | limb as u128)
    }

    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            limbs: self.limbs.clone(),
        }
    }

    /// Strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.limbs.is_empty()
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Truncating division: the quotient rounds toward zero and the remainder
    /// has the sign of the dividend.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let (quotient, rem) = div_rem_magnitude(&self.limbs, &divisor.limbs);
        Ok((
            Self::from_parts(self.negative != divisor.negative, quotient),
            Self::from_parts(self.negative, rem),
        ))
    }

    pub fn checked_div(&self, divisor: &Self) -> Result<Self> {
        Ok(self.div_rem(divisor)?.0)
    }

    /// Division that is required to leave no remainder.
    pub fn exact_div(&self, divisor: &Self) -> Result<Self> {
        let (quotient, rem) = self.div_rem(divisor)?;
        if rem.is_zero() {
            Ok(quotient)
        } else {
            Err(Error::InexactDivision {
                dividend: self.clone(),
                divisor: divisor.clone(),
            })
        }
    }

    /// Greatest common divisor, always non-negative. gcd(0, 0) is 0.
    pub fn gcd(&self, other: &Self) -> Self {
        crate::gcd::gcd(self.abs(), other.abs())
    }

    pub fn factorial(n: u32) -> Self {
        Self::falling_factorial(n.into(), n.into())
    }

    /// The product of the k terms n·(n-1)·...·(n-k+1).
    ///
    /// The empty product for k = 0 is 1. If k > n one of the terms is zero,
    /// and so is the result.
    pub fn falling_factorial(n: u64, k: u64) -> Self {
        if k > n {
            return Self::zero();
        }

        let mut limbs = vec![1];
        for factor in (n - k)..n {
            let factor = factor + 1;
            match Limb::try_from(factor) {
                Ok(small) => mul_add_small(&mut limbs, small, 0),
                Err(_) => limbs = mul_magnitude(&limbs, &Self::from(factor).limbs),
            }
        }

        Self {
            negative: false,
            limbs,
        }
    }

    pub fn pow2(n: u32) -> Self {
        let mut limbs = vec![0; (n / LIMB_BITS) as usize];
        limbs.push(1 << (n % LIMB_BITS));

        Self {
            negative: false,
            limbs,
        }
    }
}

impl From<u128> for BigInteger {
    fn from(mut value: u128) -> Self {
        let mut limbs = Vec::new();
        while value != 0 {
            limbs.push(value as Limb);
            value >>= LIMB_BITS;
        }

        Self {
            negative: false,
            limbs,
        }
    }
}

impl From<i128> for BigInteger {
    fn from(value: i128) -> Self {
        let mut result = Self::from(value.unsigned_abs());
        result.negative = value < 0;
        result
    }
}

macro_rules! impl_from_primitive {
    ($wide:ty => $($t:ty),*) => {
        $(
            impl From<$t> for BigInteger {
                fn from(value: $t) -> Self {
                    Self::from(value as $wide)
                }
            }
        )*
    };
}

impl_from_primitive!(i128 => i8, i16, i32, i64, isize);
impl_from_primitive!(u128 => u8, u16, u32, u64, usize);

impl ToPrimitive for BigInteger {
    fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|v| i64::try_from(v).ok())
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|v| u64::try_from(v).ok())
    }

    fn to_i128(&self) -> Option<i128> {
        if self.limbs.len() > 4 {
            return None;
        }

        let magnitude = self.magnitude();
        if !self.negative {
            i128::try_from(magnitude).ok()
        } else if magnitude == i128::MIN.unsigned_abs() {
            Some(i128::MIN)
        } else {
            i128::try_from(magnitude).ok().map(|v| -v)
        }
    }

    fn to_u128(&self) -> Option<u128> {
        if self.negative || self.limbs.len() > 4 {
            None
        } else {
            Some(self.magnitude())
        }
    }
}

impl Zero for BigInteger {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }
}

impl One for BigInteger {
    fn one() -> Self {
        Self {
            negative: false,
            limbs: vec![1],
        }
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => cmp_magnitude(&self.limbs, &other.limbs),
            (true, true) => cmp_magnitude(&other.limbs, &self.limbs),
        }
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Neg for BigInteger {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.negative = !self.negative && !self.limbs.is_empty();
        self
    }
}

impl<'a> Neg for &'a BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        -self.clone()
    }
}

impl<'a, 'b> Add<&'b BigInteger> for &'a BigInteger {
    type Output = BigInteger;

    fn add(self, rhs: &'b BigInteger) -> BigInteger {
        signed_add(self.negative, &self.limbs, rhs.negative, &rhs.limbs)
    }
}

impl<'a, 'b> Sub<&'b BigInteger> for &'a BigInteger {
    type Output = BigInteger;

    fn sub(self, rhs: &'b BigInteger) -> BigInteger {
        signed_add(self.negative, &self.limbs, !rhs.negative, &rhs.limbs)
    }
}

impl<'a, 'b> Mul<&'b BigInteger> for &'a BigInteger {
    type Output = BigInteger;

    fn mul(self, rhs: &'b BigInteger) -> BigInteger {
        BigInteger::from_parts(
            self.negative != rhs.negative,
            mul_magnitude(&self.limbs, &rhs.limbs),
        )
    }
}

impl<'a, 'b> Div<&'b BigInteger> for &'a BigInteger {
    type Output = BigInteger;

    fn div(self, rhs: &'b BigInteger) -> BigInteger {
        match self.div_rem(rhs) {
            Ok((quotient, _)) => quotient,
            Err(_) => panic!("attempt to divide by zero"),
        }
    }
}

impl<'a, 'b> Rem<&'b BigInteger> for &'a BigInteger {
    type Output = BigInteger;

    fn rem(self, rhs: &'b BigInteger) -> BigInteger {
        match self.div_rem(rhs) {
            Ok((_, rem)) => rem,
            Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
        }
    }
}

/// Derives the owned operand variants from the by-reference implementation.
macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<BigInteger> for BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: BigInteger) -> BigInteger {
                <&BigInteger as $imp<&BigInteger>>::$method(&self, &rhs)
            }
        }

        impl<'a> $imp<&'a BigInteger> for BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: &'a BigInteger) -> BigInteger {
                <&BigInteger as $imp<&BigInteger>>::$method(&self, rhs)
            }
        }

        impl<'a> $imp<BigInteger> for &'a BigInteger {
            type Output = BigInteger;

            fn $method(self, rhs: BigInteger) -> BigInteger {
                <&BigInteger as $imp<&BigInteger>>::$method(self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
forward_binop!(Div, div);
forward_binop!(Rem, rem);

macro_rules! forward_assign_op {
    ($imp:ident, $method:ident, $op:ident, $op_method:ident) => {
        impl<'a> $imp<&'a BigInteger> for BigInteger {
            fn $method(&mut self, rhs: &'a BigInteger) {
                *self = <&BigInteger as $op<&BigInteger>>::$op_method(&*self, rhs);
            }
        }

        impl $imp for BigInteger {
            fn $method(&mut self, rhs: BigInteger) {
                *self = <&BigInteger as $op<&BigInteger>>::$op_method(&*self, &rhs);
            }
        }
    };
}

forward_assign_op!(AddAssign, add_assign, Add, add);
forward_assign_op!(SubAssign, sub_assign, Sub, sub);
forward_assign_op!(MulAssign, mul_assign, Mul, mul);

impl<'a> Pow<u32> for &'a BigInteger {
    type Output = BigInteger;

    fn pow(self, mut exponent: u32) -> BigInteger {
        let mut base = self.clone();
        let mut ret = BigInteger::one();

        while exponent != 0 {
            if exponent & 1 == 1 {
                ret *= &base;
            }
            exponent >>= 1;
            if exponent != 0 {
                base = &base * &base;
            }
        }

        ret
    }
}

impl Pow<u32> for BigInteger {
    type Output = BigInteger;

    fn pow(self, exponent: u32) -> BigInteger {
        <&BigInteger as Pow<u32>>::pow(&self, exponent)
    }
}

impl Num for BigInteger {
    type FromStrRadixErr = Error;

    fn from_str_radix(src: &str, radix: u32) -> Result<Self> {
        if !(2..=36).contains(&radix) {
            return Err(Error::Parse(format!("unsupported radix {}", radix)));
        }

        let (negative, digits) = match src.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, src.strip_prefix('+').unwrap_or(src)),
        };
        if digits.is_empty() {
            return Err(Error::Parse(format!("{:?} has no digits", src)));
        }

        let mut limbs = Vec::new();
        for c in digits.chars() {
            let digit = c
                .to_digit(radix)
                .ok_or_else(|| Error::Parse(format!("invalid digit {:?} in {:?}", c, src)))?;
            mul_add_small(&mut limbs, radix, digit);
        }

        Ok(Self::from_parts(negative, limbs))
    }
}

impl Signed for BigInteger {
    fn abs(&self) -> Self {
        BigInteger::abs(self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            Self::zero()
        } else {
            self - other
        }
    }

    fn signum(&self) -> Self {
        if self.is_zero() {
            Self::zero()
        } else if self.negative {
            -Self::one()
        } else {
            Self::one()
        }
    }

    fn is_positive(&self) -> bool {
        BigInteger::is_positive(self)
    }

    fn is_negative(&self) -> bool {
        self.negative
    }
}

impl FromStr for BigInteger {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_radix(s, 10)
    }
}

impl Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut chunks = Vec::new();
        let mut rest = self.limbs.clone();
        while !rest.is_empty() {
            let (quotient, chunk) = div_rem_small(&rest, DECIMAL_CHUNK);
            chunks.push(chunk);
            rest = quotient;
        }

        let mut digits = match chunks.pop() {
            None => String::from("0"),
            Some(top) => top.to_string(),
        };
        for chunk in chunks.iter().rev() {
            write!(digits, "{:0width$}", chunk, width = DECIMAL_CHUNK_DIGITS)?;
        }

        f.pad_integral(!self.negative, "", &digits)
    }
}

#[cfg(test)]
mod tests {
    use num_traits::{Num, One, Pow, Signed, ToPrimitive, Zero};
    use proptest::prelude::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use rug::Complete;

    use super::BigInteger;
    use crate::error::Error;

    fn big(s: &str) -> BigInteger {
        s.parse().unwrap()
    }

    /// Random decimal literal with up to 90 digits, so the values span
    /// several limbs.
    fn random_literal(rng: &mut StdRng) -> String {
        let len = rng.gen_range(1..=90);
        let mut s = String::with_capacity(len + 1);
        if rng.gen_bool(0.5) {
            s.push('-');
        }
        for _ in 0..len {
            s.push(char::from(b'0' + rng.gen_range(0..10u8)));
        }
        s
    }

    // Every arithmetic operation is cross checked against GMP.
    #[test]
    fn arithmetic_matches_rug() {
        let mut rng = StdRng::seed_from_u64(0x1e9e);

        for _ in 0..500 {
            let a_str = random_literal(&mut rng);
            let b_str = random_literal(&mut rng);

            let a = big(&a_str);
            let b = big(&b_str);
            let ra: rug::Integer = a_str.parse().unwrap();
            let rb: rug::Integer = b_str.parse().unwrap();

            assert_eq!((&a + &b).to_string(), (&ra + &rb).complete().to_string());
            assert_eq!((&a - &b).to_string(), (&ra - &rb).complete().to_string());
            assert_eq!((&a * &b).to_string(), (&ra * &rb).complete().to_string());
            assert_eq!(a.cmp(&b), ra.cmp(&rb));

            if rb != 0 {
                assert_eq!((&a / &b).to_string(), (&ra / &rb).complete().to_string());
                assert_eq!((&a % &b).to_string(), (&ra % &rb).complete().to_string());
            }

            let expected_gcd = ra.clone().gcd(&rb);
            assert_eq!(a.gcd(&b).to_string(), expected_gcd.to_string());
        }
    }

    #[test]
    fn zero_is_never_negative() {
        let five = BigInteger::from(5);
        let zero = &five - &five;

        assert!(zero.is_zero());
        assert!(!zero.is_negative());
        assert!(!zero.is_positive());
        assert_eq!(zero, BigInteger::zero());
        assert_eq!(-BigInteger::zero(), BigInteger::zero());
        assert_eq!(BigInteger::from(-7) * BigInteger::zero(), BigInteger::zero());
        assert_eq!(big("-0"), BigInteger::zero());
        assert_eq!(zero.to_string(), "0");
    }

    #[test]
    fn sign_predicates() {
        assert!(BigInteger::from(3).is_positive());
        assert!(!BigInteger::from(-3).is_positive());
        assert!(BigInteger::from(-3).is_negative());
        assert_eq!(BigInteger::from(-3).abs(), BigInteger::from(3));
        assert_eq!(Signed::signum(&BigInteger::from(-12)), BigInteger::from(-1));
        assert_eq!(Signed::signum(&BigInteger::zero()), BigInteger::zero());
        assert_eq!(
            Signed::abs_sub(&BigInteger::from(2), &BigInteger::from(9)),
            BigInteger::zero()
        );
    }

    #[test]
    fn ordering() {
        let values = [
            big("-100000000000000000000"),
            BigInteger::from(-10),
            BigInteger::from(-2),
            BigInteger::zero(),
            BigInteger::from(3),
            BigInteger::pow2(40),
            big("100000000000000000000"),
        ];

        for pair in values.windows(2) {
            assert!(pair[0] < pair[1], "{} < {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn division_truncates_toward_zero() {
        let cases = [(7, 2, 3, 1), (-7, 2, -3, -1), (7, -2, -3, 1), (-7, -2, 3, -1)];
        for (a, b, q, r) in cases {
            let (quotient, rem) = BigInteger::from(a).div_rem(&BigInteger::from(b)).unwrap();
            assert_eq!(quotient, BigInteger::from(q));
            assert_eq!(rem, BigInteger::from(r));
        }
    }

    #[test]
    fn division_by_zero_is_an_error() {
        let a = BigInteger::from(42);
        assert_eq!(a.div_rem(&BigInteger::zero()), Err(Error::DivisionByZero));
        assert_eq!(a.checked_div(&BigInteger::zero()), Err(Error::DivisionByZero));
        assert_eq!(a.exact_div(&BigInteger::zero()), Err(Error::DivisionByZero));
    }

    #[test]
    #[should_panic(expected = "divide by zero")]
    fn division_operator_panics_on_zero() {
        let _ = BigInteger::from(1) / BigInteger::zero();
    }

    #[test]
    fn exact_division() {
        let a = BigInteger::factorial(20);
        let b = BigInteger::factorial(13);
        assert_eq!(
            a.exact_div(&b).unwrap(),
            BigInteger::falling_factorial(20, 7)
        );

        assert_eq!(
            BigInteger::from(10).exact_div(&BigInteger::from(4)),
            Err(Error::InexactDivision {
                dividend: BigInteger::from(10),
                divisor: BigInteger::from(4),
            })
        );
    }

    #[test]
    fn factorials() {
        assert_eq!(BigInteger::factorial(0), BigInteger::one());
        assert_eq!(BigInteger::factorial(1), BigInteger::one());
        assert_eq!(BigInteger::factorial(13), BigInteger::from(6227020800u64));
        assert_eq!(
            BigInteger::factorial(25),
            big("15511210043330985984000000")
        );

        assert_eq!(BigInteger::falling_factorial(10, 3), BigInteger::from(720));
        assert_eq!(BigInteger::falling_factorial(7, 0), BigInteger::one());
        assert_eq!(BigInteger::falling_factorial(0, 0), BigInteger::one());
        assert_eq!(BigInteger::falling_factorial(3, 5), BigInteger::zero());

        // Factors beyond a single limb:
        let n = u32::MAX as u64 + 2;
        assert_eq!(
            BigInteger::falling_factorial(n, 2),
            BigInteger::from(n) * BigInteger::from(n - 1)
        );
    }

    #[test]
    fn powers() {
        assert_eq!(BigInteger::pow2(0), BigInteger::one());
        assert_eq!(BigInteger::pow2(31), BigInteger::from(1u64 << 31));
        assert_eq!(BigInteger::pow2(32), BigInteger::from(1u64 << 32));
        assert_eq!(
            BigInteger::pow2(100),
            big("1267650600228229401496703205376")
        );
        assert_eq!(BigInteger::from(2).pow(100), BigInteger::pow2(100));
        assert_eq!(
            BigInteger::from(3).pow(40),
            BigInteger::from(12157665459056928801u64)
        );
        assert_eq!(BigInteger::from(-3).pow(3), BigInteger::from(-27));
        assert_eq!(BigInteger::zero().pow(0), BigInteger::one());
    }

    #[test]
    fn machine_integer_round_trip() {
        for v in [0, 1, -1, i64::MAX, i64::MIN, 1 << 32, -(1 << 32)] {
            assert_eq!(BigInteger::from(v).to_i64(), Some(v));
        }
        assert_eq!(BigInteger::from(u64::MAX).to_u64(), Some(u64::MAX));
        assert_eq!(BigInteger::from(i128::MIN).to_i128(), Some(i128::MIN));

        assert_eq!((BigInteger::from(i64::MAX) + BigInteger::one()).to_i64(), None);
        assert_eq!(BigInteger::from(-1).to_u64(), None);
        assert_eq!(BigInteger::pow2(130).to_u128(), None);
    }

    #[test]
    fn parsing() {
        assert_eq!(big("+12"), BigInteger::from(12));
        assert_eq!(big("-987654321987654321987"), -big("987654321987654321987"));
        assert_eq!(
            BigInteger::from_str_radix("ff", 16).unwrap(),
            BigInteger::from(255)
        );
        assert_eq!(
            BigInteger::from_str_radix("-zz", 36).unwrap(),
            BigInteger::from(-1295)
        );

        assert!(matches!("".parse::<BigInteger>(), Err(Error::Parse(_))));
        assert!(matches!("-".parse::<BigInteger>(), Err(Error::Parse(_))));
        assert!(matches!("12a".parse::<BigInteger>(), Err(Error::Parse(_))));
        assert!(matches!(
            BigInteger::from_str_radix("1", 37),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn display() {
        let s = "-1000000000000000000000000000001";
        assert_eq!(big(s).to_string(), s);
        assert_eq!(big("1000000000").to_string(), "1000000000");
        assert_eq!(format!("{:>6}", BigInteger::from(-42)), "   -42");
        assert_eq!(format!("{:+}", BigInteger::from(7)), "+7");
        assert_eq!(format!("{:04}", BigInteger::from(7)), "0007");
    }

    fn product_of(values: &[i64]) -> BigInteger {
        values
            .iter()
            .fold(BigInteger::one(), |acc, &v| acc * BigInteger::from(v))
    }

    proptest! {
        #[test]
        fn add_then_sub_restores(a in prop::collection::vec(any::<i64>(), 1..5),
                                 b in prop::collection::vec(any::<i64>(), 1..5)) {
            let a = product_of(&a);
            let b = product_of(&b);
            prop_assert_eq!(&(&a + &b) - &b, a);
        }

        #[test]
        fn mul_commutative(a in prop::collection::vec(any::<i64>(), 1..5),
                           b in prop::collection::vec(any::<i64>(), 1..5)) {
            let a = product_of(&a);
            let b = product_of(&b);
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn i64_round_trip(v in any::<i64>()) {
            prop_assert_eq!(BigInteger::from(v).to_i64(), Some(v));
            prop_assert_eq!(BigInteger::from(v).to_string(), v.to_string());
        }

        #[test]
        fn div_rem_identity(a in prop::collection::vec(any::<i64>(), 1..5),
                            b in prop::collection::vec(any::<i64>(), 1..3)) {
            let a = product_of(&a);
            let b = product_of(&b);
            prop_assume!(!b.is_zero());

            let (quotient, rem) = a.div_rem(&b).unwrap();
            prop_assert_eq!(&(&quotient * &b) + &rem, a);
            prop_assert!(rem.abs() < b.abs());
        }

        #[test]
        fn gcd_properties(a in any::<i64>(), b in any::<i64>()) {
            let a = BigInteger::from(a);
            let b = BigInteger::from(b);

            prop_assert_eq!(a.gcd(&b), b.gcd(&a));
            prop_assert_eq!(a.gcd(&BigInteger::zero()), a.abs());
            prop_assert!(!a.gcd(&b).is_negative());
        }
    }
}
