//! Single-word short division and multi-word Knuth Algorithm D long
//! division.
//!
//! Division and remainder are two views of one routine, [`BigInt::div_rem`]:
//! `self == q * rhs + r`, `|r| < |rhs|`, `sign(r) == sign(self)`,
//! `sign(q) == sign(self) ^ sign(rhs)`. Dividing by zero panics, matching how
//! Rust's own integer `Div`/`Rem` treat it — `Div`/`DivAssign` panic with
//! `"attempt to divide by zero"`, `Rem`/`RemAssign` with `"attempt to
//! calculate the remainder with a divisor of zero"`.

use std::ops::{Div, DivAssign, Rem, RemAssign};

use crate::word::NEG_EXT;
use crate::BigInt;

impl BigInt {
    /// Short-divide a non-negative magnitude by a single word, in place.
    /// Returns the remainder. High-to-low pass over a 64-bit
    /// `carry:word` window.
    pub(crate) fn short_div_assign(&mut self, divisor: u32) -> u32 {
        assert!(divisor != 0, "attempt to divide by zero");
        let mut carry: u64 = 0;
        for i in (0..self.length()).rev() {
            let window = (carry << 32) | self.words[i] as u64;
            self.words[i] = (window / divisor as u64) as u32;
            carry = window % divisor as u64;
        }
        self.trim();
        carry as u32
    }

    /// Does `self >= rhs * beta^shift`, treating `rhs` as living at word
    /// offset `shift` inside `self`? Length-then-lexicographic comparison
    /// of two non-negative magnitudes.
    fn shift_compare(&self, rhs: &BigInt, shift: usize) -> bool {
        let rhs_len = rhs.length();
        let self_len = self.length();
        if rhs_len + shift != self_len {
            return rhs_len + shift < self_len;
        }
        for i in (0..rhs_len).rev() {
            let a = self.words[i + shift];
            let b = rhs.words[i];
            if a != b {
                return a > b;
            }
        }
        true
    }

    /// Subtract a raw word vector from `self`, starting at word offset
    /// `shift`, propagating borrow through the tail. `self` is treated as
    /// a plain non-negative magnitude buffer, not a sign-extended value.
    fn shift_sub(&mut self, rhs: &[u32], shift: usize) {
        let new_len = self.words.len().max(rhs.len() + shift);
        self.words.resize(new_len, 0);

        let mut borrow: u64 = 0;
        for (i, &r) in rhs.iter().enumerate() {
            let cur = (self.words[i + shift] as u64)
                .wrapping_sub(r as u64)
                .wrapping_sub(borrow);
            self.words[i + shift] = cur as u32;
            borrow = (cur >> 63) & 1;
        }
        let mut i = rhs.len() + shift;
        while borrow != 0 && i < self.words.len() {
            let before = self.words[i];
            self.words[i] = before.wrapping_sub(1);
            borrow = if before == 0 { 1 } else { 0 };
            i += 1;
        }
    }

    /// Subtract `divider * q_hat * beta^shift` from `self`: form the
    /// product into a scratch buffer of length `|divider| + 1`, then
    /// [`BigInt::shift_sub`] it in.
    fn sub_div_result(&mut self, divider: &BigInt, q_hat: u32, shift: usize) {
        let mut product = vec![0u32; divider.length() + 1];
        let mut carry: u64 = 0;
        for i in 0..divider.length() {
            let cur = divider.words[i] as u64 * q_hat as u64 + carry;
            product[i] = cur as u32;
            carry = cur >> 32;
        }
        product[divider.length()] = carry as u32;
        self.shift_sub(&product, shift);
    }

    /// Divide `self` by `rhs`, returning `(quotient, remainder)`.
    ///
    /// Panics if `rhs` is zero. Both `/` and `%` are built on this single
    /// routine: they differ only in which half of the pair they keep. Called
    /// directly (rather than through `%`), a zero divisor panics with the
    /// division message below; `Rem`/`RemAssign` check first so they panic
    /// with their own message instead of reaching this one.
    pub fn div_rem(&self, rhs: &BigInt) -> (BigInt, BigInt) {
        assert!(!rhs.is_zero(), "attempt to divide by zero");

        let mut dividend = self.abs();
        let mut divisor = rhs.abs();

        if dividend < divisor {
            return (BigInt::from(0i32), self.clone());
        }

        if divisor.length() == 1 {
            let word = divisor.words[0];
            let remainder_word = dividend.short_div_assign(word);
            let mut quotient = dividend;
            if self.sign() ^ rhs.sign() {
                quotient.negate();
            }
            let mut remainder = BigInt::from(remainder_word);
            if self.sign() {
                remainder.negate();
            }
            return (quotient, remainder);
        }

        // Knuth Algorithm D. Normalize so the divisor's top word has its
        // MSB set, bounding the trial-quotient error to at most 2.
        let top = divisor.strip_trailing_zero_word();
        let norm = top.leading_zeros();
        dividend.shl_words(norm);
        divisor.shl_words(norm);
        let divider_high = divisor.strip_trailing_zero_word() as u64;

        let n = divisor.length();
        let m = dividend.length() - divisor.length();
        let mut q = vec![0u32; m + 1];

        if dividend.shift_compare(&divisor, m) {
            q[m] = 1;
            dividend.shift_sub(&divisor.words, m);
        }

        for i in (0..m).rev() {
            let hi = dividend.get(n + i) as u64;
            let lo = dividend.get(n + i - 1) as u64;
            let window = (hi << 32) | lo;
            let mut q_hat = (window / divider_high).min(u32::MAX as u64) as u32;

            dividend.sub_div_result(&divisor, q_hat, i);
            while dividend.sign() {
                let new_len = dividend.words.len() + 1;
                dividend.words.resize(new_len, NEG_EXT);
                q_hat -= 1;

                let count = dividend.words.len() - i;
                let mut carry: u64 = 0;
                for j in 0..count {
                    let sum = dividend.get(i + j) as u64 + divisor.get(j) as u64 + carry;
                    dividend.words[i + j] = sum as u32;
                    carry = sum >> 32;
                }
                dividend.trim();
            }
            q[i] = q_hat;
        }

        let mut quotient = BigInt::from_words(q);
        if BigInt::highest_bit(*quotient.words.last().expect("words is never empty")) {
            quotient.words.push(0);
        }
        quotient.trim();

        dividend.shr_words(norm);
        let mut remainder = dividend;

        if self.sign() ^ rhs.sign() {
            quotient.negate();
        }
        if self.sign() {
            remainder.negate();
        }
        (quotient, remainder)
    }
}

impl DivAssign<&BigInt> for BigInt {
    fn div_assign(&mut self, rhs: &BigInt) {
        *self = self.div_rem(rhs).0;
    }
}

impl DivAssign<BigInt> for BigInt {
    fn div_assign(&mut self, rhs: BigInt) {
        *self /= &rhs;
    }
}

impl Div<&BigInt> for BigInt {
    type Output = BigInt;
    fn div(self, rhs: &BigInt) -> BigInt {
        self.div_rem(rhs).0
    }
}

impl Div<BigInt> for BigInt {
    type Output = BigInt;
    fn div(self, rhs: BigInt) -> BigInt {
        self.div_rem(&rhs).0
    }
}

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;
    fn div(self, rhs: &BigInt) -> BigInt {
        self.div_rem(rhs).0
    }
}

/// Shared zero-divisor check for `%`/`%=`, panicking with the
/// remainder-specific message before `div_rem` would otherwise panic with
/// its own division-specific one.
fn assert_nonzero_rem_divisor(rhs: &BigInt) {
    assert!(
        !rhs.is_zero(),
        "attempt to calculate the remainder with a divisor of zero"
    );
}

impl RemAssign<&BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: &BigInt) {
        assert_nonzero_rem_divisor(rhs);
        *self = self.div_rem(rhs).1;
    }
}

impl RemAssign<BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: BigInt) {
        *self %= &rhs;
    }
}

impl Rem<&BigInt> for BigInt {
    type Output = BigInt;
    fn rem(self, rhs: &BigInt) -> BigInt {
        assert_nonzero_rem_divisor(rhs);
        self.div_rem(rhs).1
    }
}

impl Rem<BigInt> for BigInt {
    type Output = BigInt;
    fn rem(self, rhs: BigInt) -> BigInt {
        assert_nonzero_rem_divisor(&rhs);
        self.div_rem(&rhs).1
    }
}

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;
    fn rem(self, rhs: &BigInt) -> BigInt {
        assert_nonzero_rem_divisor(rhs);
        self.div_rem(rhs).1
    }
}
