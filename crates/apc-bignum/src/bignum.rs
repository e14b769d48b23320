//! The arbitrary-precision integer type.
//!
//! A [`Bignum`] is a sign, a radix and an owned sequence of limbs stored
//! least-significant first. Every constructor and every operation
//! normalizes its result: no leading zero limbs, and zero is always a
//! single zero limb with a positive sign, so `-0` cannot be observed.

use std::cmp::Ordering;
use std::fmt;

use num_traits::{One, Zero};
use smallvec::{smallvec, SmallVec};

use crate::error::Error;
use crate::radix::{Limb, RadixEntry, RADIX_DEFAULT};
use crate::{arith, convert, div, text};

/// Limb storage; values up to four limbs stay inline.
pub(crate) type LimbVec = SmallVec<[Limb; 4]>;

/// A signed arbitrary-precision integer tagged with its radix.
///
/// Operands of `+`, `-`, `*` and comparisons must share a radix; mixing
/// radices (when neither operand is zero) is a caller error and panics.
/// The only sanctioned way to move a value between radices is
/// [`Bignum::convert`].
#[derive(Clone)]
pub struct Bignum {
    pub(crate) negative: bool,
    pub(crate) radix: u32,
    /// Limbs least-significant first; never empty, no leading zero limb
    /// unless the value is zero.
    pub(crate) limbs: LimbVec,
}

impl Bignum {
    /// Canonical zero in the default radix.
    #[must_use]
    pub fn zero() -> Self {
        Self::zero_in(RADIX_DEFAULT)
    }

    /// Canonical one in the default radix.
    #[must_use]
    pub fn one() -> Self {
        Self::one_in(RADIX_DEFAULT)
    }

    /// Creates a base-10 value from a machine integer.
    #[must_use]
    pub fn new(value: i64) -> Self {
        let entry = RadixEntry::for_valid(RADIX_DEFAULT);
        Self::from_magnitude(value < 0, value.unsigned_abs(), entry)
    }

    /// Creates a value from a machine integer, tagged with `radix`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RadixOutOfRange`] if `radix` is outside `[2, 36]`.
    pub fn from_i64(value: i64, radix: u32) -> Result<Self, Error> {
        let entry = RadixEntry::for_radix(radix)?;
        Ok(Self::from_magnitude(value < 0, value.unsigned_abs(), entry))
    }

    /// Parses `text` as an integer in `radix`.
    ///
    /// The text is an optional `-` followed by one or more digits of the
    /// radix's alphabet, either case. No partial result is ever produced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RadixOutOfRange`], [`Error::EmptyInput`],
    /// [`Error::BareSign`] or [`Error::InvalidDigit`].
    pub fn from_str_radix(text: &str, radix: u32) -> Result<Self, Error> {
        text::parse(text, radix)
    }

    /// Renders the value as text.
    ///
    /// Negative values get a leading `-`. With `explicit_radix` the text
    /// ends in `_<radix>`. Zero always prints as the single character `0`,
    /// with no sign and no radix suffix.
    #[must_use]
    pub fn to_string_radix(&self, explicit_radix: bool, uppercase: bool) -> String {
        text::print(self, explicit_radix, uppercase)
    }

    /// Floor division and remainder.
    ///
    /// The quotient rounds toward negative infinity and the remainder
    /// takes the divisor's sign, so for a positive divisor `d` the
    /// remainder is always in `[0, d)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] for a zero divisor and
    /// [`Error::UnsupportedDivisor`] when the divisor spans more than one
    /// limb.
    pub fn divmod(&self, divisor: &Bignum) -> Result<(Bignum, Bignum), Error> {
        div::divmod(self, divisor)
    }

    /// Returns this value re-expressed in `new_radix`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RadixOutOfRange`] if `new_radix` is outside
    /// `[2, 36]`; the target radix is validated before any work is done.
    pub fn convert(&self, new_radix: u32) -> Result<Bignum, Error> {
        convert::convert(self, new_radix)
    }

    /// The radix this value is expressed in.
    #[must_use]
    pub fn radix(&self) -> u32 {
        self.radix
    }

    /// Returns true for values below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns true for canonical zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.limbs.len() == 1 && self.limbs[0] == 0
    }

    /// Number of limbs in the normalized representation.
    #[must_use]
    pub fn limb_count(&self) -> usize {
        self.limbs.len()
    }

    /// The value as a `u32`, or `None` if it is negative or too large.
    #[must_use]
    pub fn to_u32(&self) -> Option<u32> {
        if self.negative {
            return None;
        }
        let real_base = u64::from(RadixEntry::for_valid(self.radix).real_base);
        let mut acc: u64 = 0;
        for &limb in self.limbs.iter().rev() {
            acc = acc.checked_mul(real_base)?.checked_add(u64::from(limb))?;
            if acc > u64::from(u32::MAX) {
                return None;
            }
        }
        Some(acc as u32)
    }

    /// Canonical zero tagged with `radix` (assumed valid).
    pub(crate) fn zero_in(radix: u32) -> Self {
        Self {
            negative: false,
            radix,
            limbs: smallvec![0],
        }
    }

    /// One tagged with `radix` (assumed valid).
    pub(crate) fn one_in(radix: u32) -> Self {
        Self {
            negative: false,
            radix,
            limbs: smallvec![1],
        }
    }

    /// Builds a value from raw parts and normalizes it.
    pub(crate) fn from_parts(negative: bool, radix: u32, limbs: LimbVec) -> Self {
        let mut result = Self {
            negative,
            radix,
            limbs,
        };
        result.normalize();
        result
    }

    /// Decomposes a machine-word magnitude into limbs of `entry`'s radix.
    fn from_magnitude(negative: bool, mut magnitude: u64, entry: &RadixEntry) -> Self {
        let real_base = u64::from(entry.real_base);
        let mut limbs = LimbVec::new();
        loop {
            limbs.push((magnitude % real_base) as Limb);
            magnitude /= real_base;
            if magnitude == 0 {
                break;
            }
        }
        Self::from_parts(negative, entry.radix, limbs)
    }

    /// Strips leading zero limbs and canonicalizes zero.
    ///
    /// Zero keeps exactly one zero limb and loses its sign, so every
    /// produced value satisfies the representation invariant.
    pub(crate) fn normalize(&mut self) {
        while self.limbs.len() > 1 && self.limbs.last().map_or(false, |&limb| limb == 0) {
            self.limbs.pop();
        }
        if self.limbs.is_empty() {
            self.limbs.push(0);
        }
        if self.limbs.len() == 1 && self.limbs[0] == 0 {
            self.negative = false;
        }
    }

    /// Compares absolute values; radices assumed equal.
    pub(crate) fn cmp_magnitude(&self, other: &Bignum) -> Ordering {
        match self.limbs.len().cmp(&other.limbs.len()) {
            Ordering::Equal => {}
            ord => return ord,
        }
        for (a, b) in self.limbs.iter().rev().zip(other.limbs.iter().rev()) {
            match a.cmp(b) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl Ord for Bignum {
    /// Sign-aware total order.
    ///
    /// Zeros compare equal whatever radix they are tagged with.
    ///
    /// # Panics
    ///
    /// Panics if the operands carry different radices and neither is zero.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => {
                return if other.negative {
                    Ordering::Greater
                } else {
                    Ordering::Less
                };
            }
            (false, true) => {
                return if self.negative {
                    Ordering::Less
                } else {
                    Ordering::Greater
                };
            }
            (false, false) => {}
        }

        assert_eq!(
            self.radix, other.radix,
            "cannot compare values of different radices"
        );

        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.cmp_magnitude(other),
            (true, true) => self.cmp_magnitude(other).reverse(),
        }
    }
}

impl PartialOrd for Bignum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Bignum {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Bignum {}

impl Zero for Bignum {
    fn zero() -> Self {
        Bignum::zero()
    }

    fn is_zero(&self) -> bool {
        Bignum::is_zero(self)
    }
}

impl One for Bignum {
    fn one() -> Self {
        Bignum::one()
    }
}

impl fmt::Display for Bignum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_radix(self.radix != RADIX_DEFAULT, false))
    }
}

impl fmt::Debug for Bignum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bignum({})", self.to_string_radix(true, false))
    }
}

// The case analysis behind these operators lives in `arith`.

impl std::ops::Neg for &Bignum {
    type Output = Bignum;

    fn neg(self) -> Bignum {
        arith::negate(self)
    }
}

impl std::ops::Neg for Bignum {
    type Output = Bignum;

    fn neg(self) -> Bignum {
        arith::negate(&self)
    }
}

impl std::ops::Add for &Bignum {
    type Output = Bignum;

    fn add(self, rhs: Self) -> Bignum {
        arith::add(self, rhs)
    }
}

impl std::ops::Add for Bignum {
    type Output = Bignum;

    fn add(self, rhs: Self) -> Bignum {
        arith::add(&self, &rhs)
    }
}

impl std::ops::Add<&Bignum> for Bignum {
    type Output = Bignum;

    fn add(self, rhs: &Bignum) -> Bignum {
        arith::add(&self, rhs)
    }
}

impl std::ops::Sub for &Bignum {
    type Output = Bignum;

    fn sub(self, rhs: Self) -> Bignum {
        arith::sub(self, rhs)
    }
}

impl std::ops::Sub for Bignum {
    type Output = Bignum;

    fn sub(self, rhs: Self) -> Bignum {
        arith::sub(&self, &rhs)
    }
}

impl std::ops::Sub<&Bignum> for Bignum {
    type Output = Bignum;

    fn sub(self, rhs: &Bignum) -> Bignum {
        arith::sub(&self, rhs)
    }
}

impl std::ops::Mul for &Bignum {
    type Output = Bignum;

    fn mul(self, rhs: Self) -> Bignum {
        arith::mul(self, rhs)
    }
}

impl std::ops::Mul for Bignum {
    type Output = Bignum;

    fn mul(self, rhs: Self) -> Bignum {
        arith::mul(&self, &rhs)
    }
}

impl std::ops::Mul<&Bignum> for Bignum {
    type Output = Bignum;

    fn mul(self, rhs: &Bignum) -> Bignum {
        arith::mul(&self, rhs)
    }
}
