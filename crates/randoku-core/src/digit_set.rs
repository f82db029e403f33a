//! A set of digits 1-9, backed by a bitmask.

use std::{
    fmt::{self, Debug},
    iter::FusedIterator,
};

use crate::digit::Digit;

/// A set of digits 1-9, represented as a 16-bit bitmask.
///
/// Bits 0-8 represent digits 1-9 respectively. This is the candidate set
/// type: marking a digit as present or absent is a single bit operation, so
/// constraint filtering never allocates.
///
/// An empty set is an ordinary value. In particular, a cell with no legal
/// candidate yields [`DigitSet::EMPTY`], not an error.
///
/// # Examples
///
/// ```
/// use randoku_core::{Digit, DigitSet};
///
/// let mut candidates = DigitSet::FULL;
/// candidates.remove(Digit::D5);
/// candidates.remove(Digit::D7);
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(Digit::D5));
///
/// // Iteration is in ascending digit order.
/// let first = candidates.iter().next();
/// assert_eq!(first, Some(Digit::D1));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSet(u16);

const FULL_BITS: u16 = 0x01ff;

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);
    /// The set containing all nine digits.
    pub const FULL: Self = Self(FULL_BITS);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    const fn bit(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }

    /// Inserts a digit into the set.
    pub const fn insert(&mut self, digit: Digit) {
        self.0 |= Self::bit(digit);
    }

    /// Removes a digit from the set.
    pub const fn remove(&mut self, digit: Digit) {
        self.0 &= !Self::bit(digit);
    }

    /// Returns `true` if the set contains the digit.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & Self::bit(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the digits in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0 & FULL_BITS)
    }

    /// Returns the `n`-th digit of the set in ascending order, if any.
    ///
    /// Used by selection policies that index into the candidate set.
    #[must_use]
    pub fn nth(self, n: usize) -> Option<Digit> {
        self.iter().nth(n)
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter(self.0)
    }
}

impl Default for DigitSet {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Digit>,
    {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::ops::BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// Iterator over the digits of a [`DigitSet`] in ascending order.
#[derive(Debug, Clone)]
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Digit::from_value(index + 1))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for Iter {}
impl ExactSizeIterator for Iter {}

#[cfg(test)]
mod tests {
    use crate::digit::Digit::*;

    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = DigitSet::new();
        set.insert(D1);
        set.insert(D9);
        assert!(set.contains(D1));
        assert!(set.contains(D9));
        assert!(!set.contains(D5));
        assert_eq!(set.len(), 2);

        set.remove(D1);
        assert!(!set.contains(D1));
        assert_eq!(set.len(), 1);

        // Removing an absent digit is a no-op.
        set.remove(D1);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_constants() {
        assert!(DigitSet::EMPTY.is_empty());
        assert_eq!(DigitSet::FULL.len(), 9);
        for digit in Digit::ALL {
            assert!(DigitSet::FULL.contains(digit));
        }
    }

    #[test]
    fn test_iteration_order_is_ascending() {
        let set = DigitSet::from_iter([D9, D1, D5, D3]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![D1, D3, D5, D9]);
    }

    #[test]
    fn test_nth() {
        let set = DigitSet::from_iter([D2, D4, D8]);
        assert_eq!(set.nth(0), Some(D2));
        assert_eq!(set.nth(1), Some(D4));
        assert_eq!(set.nth(2), Some(D8));
        assert_eq!(set.nth(3), None);
    }

    #[test]
    fn test_difference() {
        let a = DigitSet::from_iter([D1, D2, D3]);
        let b = DigitSet::from_iter([D2, D3, D4]);
        assert_eq!(a.difference(b), DigitSet::from_iter([D1]));
        assert_eq!(DigitSet::FULL.difference(DigitSet::FULL), DigitSet::EMPTY);
    }

    #[test]
    fn test_bit_ops() {
        let a = DigitSet::from_iter([D1, D2]);
        let b = DigitSet::from_iter([D2, D3]);
        assert_eq!(a | b, DigitSet::from_iter([D1, D2, D3]));
        assert_eq!(a & b, DigitSet::from_iter([D2]));
    }
}
