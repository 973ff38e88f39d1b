//! Houses the `calculate` function and the three merges it dispatches to.
//!
//! Each merge walks both operands once, in step, comparing the two current
//! heads. Because both operands are already sorted and duplicate-free, no
//! lookup structure is needed and the result comes out sorted and
//! duplicate-free too.

use std::cmp::Ordering;
use std::iter::Peekable;

use crate::args::OpName;
use crate::sorted_set::SortedSet;

/// Calculates the set operation named by `operation`, consuming both
/// operands:
///
/// * `OpName::Union` keeps the elements of either operand,
/// * `OpName::Diff` keeps the elements of `first` that are not in `second`, and
/// * `OpName::Intersect` keeps the elements found in both.
///
#[must_use]
pub fn calculate<T: Ord>(
    operation: OpName,
    first: SortedSet<T>,
    second: SortedSet<T>,
) -> SortedSet<T> {
    match operation {
        OpName::Union => union(first, second),
        OpName::Diff => difference(first, second),
        OpName::Intersect => intersection(first, second),
    }
}

type Cursor<T> = Peekable<std::vec::IntoIter<T>>;

fn cursors<T>(first: SortedSet<T>, second: SortedSet<T>) -> (Cursor<T>, Cursor<T>) {
    (first.into_iter().peekable(), second.into_iter().peekable())
}

/// Elements in either operand. When one operand runs out, the rest of the
/// other is already in order and is appended as is.
#[must_use]
pub fn union<T: Ord>(first: SortedSet<T>, second: SortedSet<T>) -> SortedSet<T> {
    let mut result = Vec::with_capacity(first.len().max(second.len()));
    let (mut xs, mut ys) = cursors(first, second);
    while let (Some(x), Some(y)) = (xs.peek(), ys.peek()) {
        match x.cmp(y) {
            Ordering::Less => result.extend(xs.next()),
            Ordering::Greater => result.extend(ys.next()),
            Ordering::Equal => {
                result.extend(xs.next());
                ys.next();
            }
        }
    }
    result.extend(xs);
    result.extend(ys);
    SortedSet::from_sorted(result)
}

/// Elements of `first` missing from `second`. Once `first` runs out, the
/// rest of `second` can't remove anything.
#[must_use]
pub fn difference<T: Ord>(first: SortedSet<T>, second: SortedSet<T>) -> SortedSet<T> {
    let mut result = Vec::with_capacity(first.len());
    let (mut xs, mut ys) = cursors(first, second);
    while let (Some(x), Some(y)) = (xs.peek(), ys.peek()) {
        match x.cmp(y) {
            Ordering::Less => result.extend(xs.next()),
            Ordering::Greater => {
                ys.next();
            }
            Ordering::Equal => {
                xs.next();
                ys.next();
            }
        }
    }
    result.extend(xs);
    SortedSet::from_sorted(result)
}

/// Elements present in both operands. Either operand running out ends the
/// result.
#[must_use]
pub fn intersection<T: Ord>(first: SortedSet<T>, second: SortedSet<T>) -> SortedSet<T> {
    let mut result = Vec::with_capacity(first.len().min(second.len()));
    let (mut xs, mut ys) = cursors(first, second);
    while let (Some(x), Some(y)) = (xs.peek(), ys.peek()) {
        match x.cmp(y) {
            Ordering::Less => {
                xs.next();
            }
            Ordering::Greater => {
                ys.next();
            }
            Ordering::Equal => {
                result.extend(xs.next());
                ys.next();
            }
        }
    }
    SortedSet::from_sorted(result)
}
