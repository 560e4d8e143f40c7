//! Residue arithmetic over Z_m for arbitrary-precision moduli

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

/// Modular helpers over `BigInt` residues.
///
/// All functions expect a strictly positive modulus; callers validate this
/// once at the parameter boundary.
pub struct ModQ;

impl ModQ {
    /// Reduce a value into the canonical range [0, m)
    #[inline]
    pub fn reduce(a: &BigInt, m: &BigInt) -> BigInt {
        a.mod_floor(m)
    }

    /// Negate a value modulo m
    #[inline]
    pub fn negate(a: &BigInt, m: &BigInt) -> BigInt {
        let r = Self::reduce(a, m);
        if r.is_zero() {
            r
        } else {
            m - r
        }
    }

    /// Convert a signed integer to its representation in Z_m
    #[inline]
    pub fn from_signed(val: i64, m: &BigInt) -> BigInt {
        Self::reduce(&BigInt::from(val), m)
    }

    /// Centered representative in (-m/2, m/2]
    #[inline]
    pub fn to_signed(val: &BigInt, m: &BigInt) -> BigInt {
        let r = Self::reduce(val, m);
        if &r * 2 > *m {
            r - m
        } else {
            r
        }
    }

    /// Round `num / den` to the nearest integer, halves rounding up.
    ///
    /// `den` must be positive; `num` may have either sign.
    #[inline]
    pub fn round_div(num: &BigInt, den: &BigInt) -> BigInt {
        let two = BigInt::from(2);
        (num * &two + den).div_floor(&(den * &two))
    }

    /// Least common multiple of two positive moduli
    #[inline]
    pub fn lcm(a: &BigInt, b: &BigInt) -> BigInt {
        a.lcm(b).abs()
    }
}
