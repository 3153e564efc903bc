//! Sign-aware ordering and equality.

use std::cmp::Ordering;

use crate::BigInt;

impl BigInt {
    /// The word count ignored a single redundant top sign-extension word,
    /// if present — a defensive re-check on top of [`BigInt::trim`] used
    /// only for comparison.
    fn effective_length(&self) -> usize {
        let top = *self.words.last().expect("words is never empty");
        if top == 0 || top == u32::MAX {
            self.words.len() - 1
        } else {
            self.words.len()
        }
    }
}

impl PartialEq for BigInt {
    /// Canonical form makes a straight buffer comparison sufficient: equal
    /// signs and equal words, nothing more.
    fn eq(&self, other: &Self) -> bool {
        self.sign() == other.sign() && self.words == other.words
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign(), other.sign()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }

        let self_len = self.effective_length();
        let other_len = other.effective_length();
        if self_len != other_len {
            let by_length = self_len.cmp(&other_len);
            // Among same-signed values, a longer effective length means a
            // larger magnitude; for non-negative values that's the larger
            // value, but for negative values it's the *smaller* (more
            // negative) one.
            return if self.sign() {
                by_length.reverse()
            } else {
                by_length
            };
        }

        for i in (0..self_len).rev() {
            let a = self.get(i);
            let b = other.get(i);
            if a != b {
                return a.cmp(&b);
            }
        }
        Ordering::Equal
    }
}
