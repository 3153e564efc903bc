//! Additive and bitwise core: `add`/`subtract`, `negate`/`invert`, the
//! pairwise bitwise operators, and the increment/decrement helpers.
//!
//! Everything here is expressed over virtually-extended operands (via
//! [`BigInt::get`]) so signed and unsigned words interoperate uniformly.

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Neg, Not, Sub,
    SubAssign,
};

use crate::word::{NEG_EXT, POS_EXT};
use crate::BigInt;

/// Which pairwise bitwise operator [`BigInt::combine_with`] should apply.
///
/// A small, specialized loop plus this opcode stands in for first-class
/// word-transforming callables: [`BigInt::combine_with`] is that replacement
/// for AND/OR/XOR, [`BigInt::add_with`] the equivalent for
/// addition/subtraction.
pub(crate) enum BitOp {
    And,
    Or,
    Xor,
}

impl BigInt {
    /// The generic word-wise adder behind both addition and subtraction.
    ///
    /// `carry0` is the initial carry-in and `invert_rhs` selects whether
    /// `rhs`'s words are bitwise-inverted before being added — addition is
    /// `add_with(rhs, 0, false)`, subtraction is `add_with(rhs, 1, true)`
    /// (the two's-complement identity `a - b = a + !b + 1`). Resizes to
    /// `max(len(self), len(rhs)) + 2`: two words of headroom so carry
    /// propagation can never leave the sign bit of the result ambiguous
    /// before [`BigInt::trim`] runs.
    pub(crate) fn add_with(&mut self, rhs: &BigInt, carry0: u32, invert_rhs: bool) {
        let n = self.length().max(rhs.length()) + 2;
        self.resize_sign_extend(n);
        let mut carry = carry0 as u64;
        for i in 0..n {
            let rhs_word = rhs.get(i);
            let rhs_word = if invert_rhs { !rhs_word } else { rhs_word };
            let sum = self.words[i] as u64 + rhs_word as u64 + carry;
            self.words[i] = sum as u32;
            carry = sum >> 32;
        }
        self.trim();
    }

    /// The generic word-wise combiner behind `&`, `|`, and `^`.
    ///
    /// Resizes to `max(len(self), len(rhs)) + 1`: one word of headroom
    /// preserves the correct post-operation sign bit for every combination
    /// of operand signs.
    pub(crate) fn combine_with(&mut self, rhs: &BigInt, op: BitOp) {
        let n = self.length().max(rhs.length()) + 1;
        self.resize_sign_extend(n);
        for i in 0..n {
            let a = self.get(i);
            let b = rhs.get(i);
            self.words[i] = match op {
                BitOp::And => a & b,
                BitOp::Or => a | b,
                BitOp::Xor => a ^ b,
            };
        }
        self.trim();
    }

    /// Two's-complement negation, in place.
    ///
    /// Distinct from unary `-` (which constructs the result via
    /// subtraction from zero): this mutates `self` directly by inverting
    /// every word and propagating a `+1` through the carry chain. If that
    /// carry escapes the top word, a sign-extension word is appended
    /// before trimming (this is the only way negation can grow the
    /// buffer — it is how negating `0` becomes the two-word `0` that
    /// stays zero, and how negating `i32::MIN`-shaped values gains the
    /// extra word their magnitude needs).
    pub fn negate(&mut self) {
        for w in self.words.iter_mut() {
            *w = !*w;
        }
        let mut carry: u64 = 1;
        for w in self.words.iter_mut() {
            if carry == 0 {
                break;
            }
            let sum = *w as u64 + carry;
            *w = sum as u32;
            carry = sum >> 32;
        }
        if carry != 0 {
            let ext = if self.sign() { NEG_EXT } else { POS_EXT };
            self.words.push(ext);
        }
        self.trim();
    }

    /// Bitwise complement, in place. No `trim` is needed: inverting every
    /// word flips the sign-extension symmetrically, so a canonical buffer
    /// stays canonical.
    pub(crate) fn invert_in_place(&mut self) {
        for w in self.words.iter_mut() {
            *w = !*w;
        }
    }

    /// The absolute value.
    ///
    /// Built as unary negation (`0 - self`) rather than [`BigInt::negate`]:
    /// subtraction's two words of carry headroom correctly widens values
    /// like `i32::MIN` that [`BigInt::negate`]'s tighter in-place growth
    /// would otherwise leave negative.
    pub fn abs(&self) -> BigInt {
        if self.sign() {
            -self
        } else {
            self.clone()
        }
    }

    /// Prefix increment: add one in place and return `self`.
    ///
    /// Rust has no overloadable `++`; this and [`BigInt::inc_post`],
    /// [`BigInt::dec`], [`BigInt::dec_post`] are the inherent-method
    /// equivalents of the `++x`/`x++`/`--x`/`x--` forms.
    pub fn inc(&mut self) -> &mut Self {
        *self += 1;
        self
    }

    /// Postfix increment: return the pre-increment value, then add one.
    pub fn inc_post(&mut self) -> Self {
        let old = self.clone();
        self.inc();
        old
    }

    /// Prefix decrement: subtract one in place and return `self`.
    pub fn dec(&mut self) -> &mut Self {
        *self -= 1;
        self
    }

    /// Postfix decrement: return the pre-decrement value, then subtract one.
    pub fn dec_post(&mut self) -> Self {
        let old = self.clone();
        self.dec();
        old
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        self.add_with(rhs, 0, false);
    }
}

impl AddAssign<BigInt> for BigInt {
    fn add_assign(&mut self, rhs: BigInt) {
        *self += &rhs;
    }
}

impl AddAssign<i32> for BigInt {
    fn add_assign(&mut self, rhs: i32) {
        *self += BigInt::from(rhs);
    }
}

impl Add<&BigInt> for BigInt {
    type Output = BigInt;
    fn add(mut self, rhs: &BigInt) -> BigInt {
        self += rhs;
        self
    }
}

impl Add<BigInt> for BigInt {
    type Output = BigInt;
    fn add(mut self, rhs: BigInt) -> BigInt {
        self += &rhs;
        self
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;
    fn add(self, rhs: &BigInt) -> BigInt {
        self.clone() + rhs
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        self.add_with(rhs, 1, true);
    }
}

impl SubAssign<BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: BigInt) {
        *self -= &rhs;
    }
}

impl SubAssign<i32> for BigInt {
    fn sub_assign(&mut self, rhs: i32) {
        *self -= BigInt::from(rhs);
    }
}

impl Sub<&BigInt> for BigInt {
    type Output = BigInt;
    fn sub(mut self, rhs: &BigInt) -> BigInt {
        self -= rhs;
        self
    }
}

impl Sub<BigInt> for BigInt {
    type Output = BigInt;
    fn sub(mut self, rhs: BigInt) -> BigInt {
        self -= &rhs;
        self
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;
    fn sub(self, rhs: &BigInt) -> BigInt {
        self.clone() - rhs
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    /// `-x`, built as `0 - x` (see [`BigInt::negate`] for the in-place form).
    fn neg(self) -> BigInt {
        BigInt::default() - self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;
    fn neg(self) -> BigInt {
        BigInt::default() - self
    }
}

impl Not for BigInt {
    type Output = BigInt;
    fn not(mut self) -> BigInt {
        self.invert_in_place();
        self
    }
}

impl Not for &BigInt {
    type Output = BigInt;
    fn not(self) -> BigInt {
        let mut v = self.clone();
        v.invert_in_place();
        v
    }
}

impl BitAndAssign<&BigInt> for BigInt {
    fn bitand_assign(&mut self, rhs: &BigInt) {
        self.combine_with(rhs, BitOp::And);
    }
}

impl BitAnd<&BigInt> for BigInt {
    type Output = BigInt;
    fn bitand(mut self, rhs: &BigInt) -> BigInt {
        self &= rhs;
        self
    }
}

impl BitAnd<BigInt> for BigInt {
    type Output = BigInt;
    fn bitand(mut self, rhs: BigInt) -> BigInt {
        self &= &rhs;
        self
    }
}

impl BitOrAssign<&BigInt> for BigInt {
    fn bitor_assign(&mut self, rhs: &BigInt) {
        self.combine_with(rhs, BitOp::Or);
    }
}

impl BitOr<&BigInt> for BigInt {
    type Output = BigInt;
    fn bitor(mut self, rhs: &BigInt) -> BigInt {
        self |= rhs;
        self
    }
}

impl BitOr<BigInt> for BigInt {
    type Output = BigInt;
    fn bitor(mut self, rhs: BigInt) -> BigInt {
        self |= &rhs;
        self
    }
}

impl BitXorAssign<&BigInt> for BigInt {
    fn bitxor_assign(&mut self, rhs: &BigInt) {
        self.combine_with(rhs, BitOp::Xor);
    }
}

impl BitXor<&BigInt> for BigInt {
    type Output = BigInt;
    fn bitxor(mut self, rhs: &BigInt) -> BigInt {
        self ^= rhs;
        self
    }
}

impl BitXor<BigInt> for BigInt {
    type Output = BigInt;
    fn bitxor(mut self, rhs: BigInt) -> BigInt {
        self ^= &rhs;
        self
    }
}
