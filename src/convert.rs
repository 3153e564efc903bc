//! Construction from native integers and decimal strings, and formatting
//! back to decimal.

use std::fmt;
use std::str::FromStr;

use crate::error::BigIntError;
use crate::BigInt;

/// `10^1 .. 10^9`, indexed by `chunk_len - 1`. Used to scale the
/// accumulator by the width of the next decimal chunk during parsing, and
/// mirrors the `POW` table in the C++ this crate was ported from.
const POW10: [u32; 9] = [
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
];

/// The base used by the decimal short-division/short-multiplication
/// routines: `10^9`, the largest power of ten that fits in a `u32`.
pub(crate) const DECIMAL_BASE: u32 = 1_000_000_000;

/// Digits consumed per chunk while parsing or formatting decimal text.
const DECIMAL_CHUNK: usize = 9;

macro_rules! impl_from_signed {
    ($($t:ty => $words:expr),* $(,)?) => {$(
        impl From<$t> for BigInt {
            /// Construct from a signed native integer, preserving its
            /// two's-complement bit pattern.
            fn from(value: $t) -> Self {
                let bits = value as i128 as u128;
                let words: Vec<u32> = (0..$words)
                    .map(|i| ((bits >> (i * 32)) & 0xffff_ffff) as u32)
                    .collect();
                let mut result = BigInt::from_words(words);
                result.trim();
                result
            }
        }
    )*};
}

macro_rules! impl_from_unsigned {
    ($($t:ty => $words:expr),* $(,)?) => {$(
        impl From<$t> for BigInt {
            /// Construct from an unsigned native integer. If the resulting
            /// top word would look negative, an extra zero word is
            /// appended so the value still reads as non-negative.
            fn from(value: $t) -> Self {
                let bits = value as u128;
                let mut words: Vec<u32> = (0..$words)
                    .map(|i| ((bits >> (i * 32)) & 0xffff_ffff) as u32)
                    .collect();
                if BigInt::highest_bit(*words.last().expect("words is never empty")) {
                    words.push(0);
                }
                let mut result = BigInt::from_words(words);
                result.trim();
                result
            }
        }
    )*};
}

impl_from_signed!(i8 => 1, i16 => 1, i32 => 1, i64 => 2, i128 => 4, isize => 2);
impl_from_unsigned!(u8 => 1, u16 => 1, u32 => 1, u64 => 2, u128 => 4, usize => 2);

impl BigInt {
    /// Parse a `BigInt` from its required decimal form: an optional leading
    /// `-`, then one or more ASCII digits.
    ///
    /// Fails with [`BigIntError::InvalidNumber`] on an empty string, a lone
    /// `-` with no digits, or any non-digit byte. There is no other valid
    /// input: no whitespace, no leading `+`, no digit separators.
    pub fn from_decimal(s: &str) -> Result<Self, BigIntError> {
        let negative = s.starts_with('-');
        let digits = if negative { &s[1..] } else { s };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BigIntError::InvalidNumber);
        }

        let mut acc = BigInt::from_words(vec![0]);
        let bytes_len = digits.len();
        let mut i = 0;
        while i < bytes_len {
            let end = (i + DECIMAL_CHUNK).min(bytes_len);
            let chunk = &digits[i..end];
            let chunk_value: u32 = chunk.parse().expect("chunk was validated as ASCII digits");
            acc.mul_small(POW10[chunk.len() - 1]);
            acc.add_small(chunk_value);
            i = end;
        }

        if BigInt::highest_bit(*acc.words.last().expect("words is never empty")) {
            acc.words.push(0);
        }
        acc.trim();

        if negative && !acc.is_zero() {
            acc.negate();
        }
        Ok(acc)
    }

    /// Render `self` in decimal: an optional leading `-` (never for zero),
    /// then one or more ASCII digits with no leading zeros.
    pub fn to_decimal(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }

        let mut magnitude = self.abs();
        let mut groups: Vec<u32> = Vec::new();
        while !magnitude.is_zero() {
            groups.push(magnitude.short_div_assign(DECIMAL_BASE));
        }

        let mut out = String::new();
        if self.sign() {
            out.push('-');
        }
        let most_significant = groups.len() - 1;
        for (i, group) in groups.iter().enumerate().rev() {
            if i == most_significant {
                out.push_str(&group.to_string());
            } else {
                out.push_str(&format!("{group:09}"));
            }
        }
        out
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal())
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInt::from_decimal(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_native_widths_round_trip() {
        assert_eq!(BigInt::from(0i32).to_decimal(), "0");
        assert_eq!(BigInt::from(-1i32).to_decimal(), "-1");
        assert_eq!(BigInt::from(i32::MIN).to_decimal(), i32::MIN.to_string());
        assert_eq!(BigInt::from(u32::MAX).to_decimal(), u32::MAX.to_string());
        assert_eq!(BigInt::from(i64::MIN).to_decimal(), i64::MIN.to_string());
        assert_eq!(BigInt::from(u64::MAX).to_decimal(), u64::MAX.to_string());
        assert_eq!(BigInt::from(i128::MIN).to_decimal(), i128::MIN.to_string());
        assert_eq!(BigInt::from(u128::MAX).to_decimal(), u128::MAX.to_string());
    }

    #[test]
    fn unsigned_top_bit_does_not_look_negative() {
        let v = BigInt::from(u32::MAX);
        assert!(!v.sign());
        assert_eq!(v.to_decimal(), "4294967295");
    }

    #[test]
    fn parses_multi_chunk_decimal() {
        let v = BigInt::from_decimal("123456789012345678901234567890").unwrap();
        assert_eq!(v.to_decimal(), "123456789012345678901234567890");
    }

    #[test]
    fn parses_negative_zero_as_zero() {
        let v = BigInt::from_decimal("-0").unwrap();
        assert!(!v.sign());
        assert_eq!(v.to_decimal(), "0");
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(BigInt::from_decimal(""), Err(BigIntError::InvalidNumber));
        assert_eq!(BigInt::from_decimal("-"), Err(BigIntError::InvalidNumber));
        assert_eq!(BigInt::from_decimal("12a"), Err(BigIntError::InvalidNumber));
        assert_eq!(BigInt::from_decimal("+3"), Err(BigIntError::InvalidNumber));
    }

    #[test]
    fn from_str_and_display_agree_with_from_decimal() {
        let v: BigInt = "-42".parse().unwrap();
        assert_eq!(v.to_decimal(), "-42");
        assert_eq!(format!("{v}"), "-42");
    }
}
