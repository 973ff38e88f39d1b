//! Provides the `SortedSet` structure: a strictly increasing, duplicate-free
//! sequence, built once from each input file's tokens.
use anyhow::Result;
use std::io;

/// A `SortedSet` is a `Vec` whose elements are in strictly increasing order.
/// * The only ways to build one are [`to_sorted_set`], `SortedSet::default()`,
///   and the merges in [`crate::operations`], all of which keep the invariant.
/// * Word tokens compare as byte strings, so `"10" < "9"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortedSet<T>(Vec<T>);

/// The `SortedSet` of word tokens, each token borrowed from the
/// (lowercased) text of an input file.
pub type WordSet<'data> = SortedSet<&'data [u8]>;

impl<T> Default for SortedSet<T> {
    fn default() -> Self {
        SortedSet(Vec::new())
    }
}

/// Sorts `items` and collapses runs of equal items into one.
///
/// `slice::sort` is a stable merge sort, and since sorting puts equal items
/// next to each other, `dedup` is all it takes to remove every duplicate.
#[must_use]
pub fn to_sorted_set<T: Ord>(items: impl IntoIterator<Item = T>) -> SortedSet<T> {
    let mut items: Vec<T> = items.into_iter().collect();
    items.sort();
    items.dedup();
    SortedSet(items)
}

impl<T: Ord> FromIterator<T> for SortedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        to_sorted_set(iter)
    }
}

impl<T> SortedSet<T> {
    /// The merges in `operations` only ever push in increasing order.
    pub(crate) fn from_sorted(items: Vec<T>) -> Self {
        SortedSet(items)
    }

    /// Number of elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Is the set empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The elements, in increasing order
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Iterates over the elements in increasing order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Gives up the set, keeping its elements
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> IntoIterator for SortedSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SortedSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: AsRef<[u8]>> SortedSet<T> {
    /// Output the `SortedSet`'s elements one per line, separated by `\n`.
    /// There is no line terminator after the last element.
    pub fn output_to(&self, mut out: impl io::Write) -> Result<()> {
        let mut lines = self.0.iter();
        if let Some(first) = lines.next() {
            out.write_all(first.as_ref())?;
        }
        for line in lines {
            out.write_all(b"\n")?;
            out.write_all(line.as_ref())?;
        }
        out.flush()?;
        Ok(())
    }
}
