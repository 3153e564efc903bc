//! Word storage and the canonical-form invariant.
//!
//! A [`BigInt`] is a `Vec<u32>` of little-endian words under a
//! sign-extension convention: the most significant bit of the top word is
//! the sign, and reads past the end of the buffer (via [`BigInt::get`])
//! return that sign smeared out to infinity. Every algorithm in this crate
//! reads through `get` rather than indexing the buffer directly, so
//! operands can be treated as conceptually infinite-length.

use crate::BigInt;

/// Number of bits in a word.
pub(crate) const WORD_BITS: u32 = 32;

/// The sign-extension word for a negative value.
pub(crate) const NEG_EXT: u32 = u32::MAX;

/// The sign-extension word for a non-negative value.
pub(crate) const POS_EXT: u32 = 0;

impl BigInt {
    /// The sign-extension word implied by `top` (the top word).
    fn ext_for(top: u32) -> u32 {
        if Self::highest_bit(top) {
            NEG_EXT
        } else {
            POS_EXT
        }
    }

    /// Whether `word`'s most significant bit is set.
    pub(crate) fn highest_bit(word: u32) -> bool {
        word & (1 << (WORD_BITS - 1)) != 0
    }

    /// Whether `self` is negative.
    ///
    /// The sign is never stored separately; it is read from the MSB of the
    /// top word, so this is always consistent with the two's-complement
    /// value even mid-computation, before [`BigInt::trim`] runs.
    pub fn sign(&self) -> bool {
        Self::highest_bit(*self.words.last().expect("words is never empty"))
    }

    /// Number of words currently in the buffer.
    ///
    /// This is an implementation size, not the "true" bit length of the
    /// value — `trim` keeps it minimal but callers should use [`BigInt::get`]
    /// rather than assume anything about words beyond `length()`.
    pub(crate) fn length(&self) -> usize {
        self.words.len()
    }

    /// Virtual word read with sign extension past the end of the buffer.
    ///
    /// `get(i)` behaves as though `self` were padded with infinitely many
    /// sign-extension words, so every word-wise algorithm in this crate can
    /// treat both operands as the same (large) length.
    pub(crate) fn get(&self, index: usize) -> u32 {
        match self.words.get(index) {
            Some(&w) => w,
            None => {
                if self.sign() {
                    NEG_EXT
                } else {
                    POS_EXT
                }
            }
        }
    }

    /// Restore the canonical-form invariant.
    ///
    /// Pops redundant sign-extension words off the top of the buffer for
    /// as long as doing so would not flip the sign bit of the new top word.
    /// Every mutating operation ends by calling this.
    pub(crate) fn trim(&mut self) {
        let cur_sign = Self::highest_bit(*self.words.last().expect("words is never empty"));
        let cur_ext = if cur_sign { NEG_EXT } else { POS_EXT };
        while self.words.len() > 1 {
            let top = self.words[self.words.len() - 1];
            let next = self.words[self.words.len() - 2];
            if top == cur_ext && Self::highest_bit(next) == cur_sign {
                self.words.pop();
            } else {
                break;
            }
        }
    }

    /// Pop a single trailing zero word if present, after which return the
    /// (possibly new) top word.
    ///
    /// Used by Knuth division to find the normalization shift against the
    /// divisor's most significant *nonzero* word without otherwise
    /// disturbing canonical form. Kept distinct from reading the top word
    /// directly rather than folding "strip a trailing zero" and "read top"
    /// into one dual-purpose method.
    pub(crate) fn strip_trailing_zero_word(&mut self) -> u32 {
        if self.words.len() != 1 && *self.words.last().expect("words is never empty") == 0 {
            self.words.pop();
        }
        *self.words.last().expect("words is never empty")
    }

    /// Build a `BigInt` from already-canonical words.
    ///
    /// Used internally where a result is already known to satisfy the
    /// invariant (e.g. a fresh zero); everywhere a buffer might not be
    /// canonical, callers must still call [`BigInt::trim`].
    pub(crate) fn from_words(words: Vec<u32>) -> Self {
        debug_assert!(!words.is_empty());
        BigInt { words }
    }

    /// Whether the value is exactly zero.
    ///
    /// In canonical form zero is always `[0]`, so a length/word check
    /// suffices; this would be unsound on a non-canonical buffer, but every
    /// public operation restores canonical form before returning.
    pub(crate) fn is_zero(&self) -> bool {
        self.words.len() == 1 && self.words[0] == 0
    }

    /// Resize the word buffer to `new_len`, extending with the current
    /// sign-extension word (never with plain zero, which would corrupt a
    /// negative value).
    pub(crate) fn resize_sign_extend(&mut self, new_len: usize) {
        let ext = Self::ext_for(*self.words.last().expect("words is never empty"));
        self.words.resize(new_len, ext);
    }
}
