use thiserror::Error;

/// Errors produced while constructing a [`BigInt`][crate::BigInt] from text.
///
/// This is the only fallible surface in the crate: every arithmetic,
/// bitwise, shift, and comparison operation on a well-formed `BigInt` is
/// total.
#[derive(Error, Clone, Copy, PartialEq, Eq, Debug)]
pub enum BigIntError {
    /// The input was empty, contained a lone sign with no digits, or
    /// contained a byte that is not an ASCII digit (after an optional
    /// leading `-`).
    #[error("invalid number")]
    InvalidNumber,
}
