use crate::sequence::PackedSequence;
use crate::symbol::Symbol;
use std::iter::FusedIterator;

/// Iterator that decodes a packed sequence position by position.
///
/// Each step goes through the same random-access path as
/// [`PackedSequence::get`].
pub struct PackedIter<'a> {
    sequence: &'a PackedSequence,
    front: usize,
    back: usize,
}

impl<'a> PackedIter<'a> {
    pub(crate) fn new(sequence: &'a PackedSequence) -> Self {
        Self {
            sequence,
            front: 0,
            back: sequence.len(),
        }
    }
}

impl Iterator for PackedIter<'_> {
    type Item = Symbol;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        // Words are only written by `PackedSequence::new`, so every in-range
        // position decodes.
        let symbol = self.sequence.get(self.front).ok()?;
        self.front += 1;
        Some(symbol)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for PackedIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let symbol = self.sequence.get(self.back - 1).ok()?;
        self.back -= 1;
        Some(symbol)
    }
}

impl ExactSizeIterator for PackedIter<'_> {}

impl FusedIterator for PackedIter<'_> {}

impl PackedSequence {
    /// Returns an iterator over the decoded base pairs.
    pub fn iter(&self) -> PackedIter<'_> {
        PackedIter::new(self)
    }
}

impl<'a> IntoIterator for &'a PackedSequence {
    type Item = Symbol;
    type IntoIter = PackedIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
