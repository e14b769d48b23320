//! Text to limb-sequence conversion and back.

use crate::bignum::{Bignum, LimbVec};
use crate::error::Error;
use crate::radix::{digit_char, digit_value, Limb, RadixEntry};

/// Parses `text` as a signed integer in `radix`.
pub(crate) fn parse(text: &str, radix: u32) -> Result<Bignum, Error> {
    let entry = RadixEntry::for_radix(radix)?;

    if text.is_empty() {
        return Err(Error::EmptyInput);
    }

    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    if digits.is_empty() {
        return Err(Error::BareSign);
    }

    // validate every character before anything is built
    let values = digits
        .chars()
        .map(|c| digit_value(c, radix).ok_or(Error::InvalidDigit { digit: c, radix }))
        .collect::<Result<Vec<Limb>, Error>>()?;

    // split into width-sized chunks from the least-significant end; the
    // leftover most-significant chunk is implicitly zero-padded
    let mut limbs = LimbVec::with_capacity(values.len() / entry.width + 1);
    let mut end = values.len();
    while end > 0 {
        let start = end.saturating_sub(entry.width);
        let mut limb: Limb = 0;
        for &value in &values[start..end] {
            limb = limb * radix + value;
        }
        limbs.push(limb);
        end = start;
    }

    Ok(Bignum::from_parts(negative, radix, limbs))
}

/// Renders `value` as canonical text.
pub(crate) fn print(value: &Bignum, explicit_radix: bool, uppercase: bool) -> String {
    if value.is_zero() {
        return "0".to_owned();
    }

    let entry = RadixEntry::for_valid(value.radix);
    let mut out = String::new();

    if value.negative {
        out.push('-');
    }

    // most-significant limb unpadded, the rest padded to the limb width
    let msd_index = value.limbs.len() - 1;
    push_limb(&mut out, value.limbs[msd_index], entry, uppercase, false);
    for &limb in value.limbs[..msd_index].iter().rev() {
        push_limb(&mut out, limb, entry, uppercase, true);
    }

    if explicit_radix {
        out.push('_');
        out.push_str(&value.radix.to_string());
    }

    out
}

/// Emits one limb, optionally left-padded with zeros to the limb width.
fn push_limb(out: &mut String, limb: Limb, entry: &RadixEntry, uppercase: bool, pad: bool) {
    if pad {
        let mut n_digits = 0usize;
        let mut v = limb;
        while v > 0 {
            v /= entry.radix;
            n_digits += 1;
        }
        n_digits = n_digits.max(1);
        for _ in n_digits..entry.width {
            out.push('0');
        }
    }
    push_digits(out, limb, entry.radix, uppercase);
}

/// Emits the digits of one limb most-significant first.
///
/// Recursion depth is bounded by the limb width, a small per-radix
/// constant.
fn push_digits(out: &mut String, limb: Limb, radix: u32, uppercase: bool) {
    if limb / radix != 0 {
        push_digits(out, limb / radix, radix, uppercase);
    }
    out.push(digit_char(limb % radix, uppercase));
}
