//! Failure Table (Prefix Function)
//!
//! The foundation of the KMP scan. For each query position the table
//! records the longest proper prefix of the query that is also a suffix
//! ending there, under the configured equivalence. On a mismatch the scan
//! falls back through this table instead of rewinding the source.

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

use crate::equiv::Equivalence;

/// Build the failure table for `query` under `eq`.
///
/// `table[i]` is the length of the longest proper prefix of `query[..=i]`
/// that is also a suffix of it. `table[0]` is 0 by definition; the empty
/// query yields an empty table.
///
/// # Complexity
/// O(N) equivalence checks for a query of length N. The fallback cursor
/// can only retreat as far as it previously advanced.
///
/// # Example
/// ```
/// use alice_match::prefix::prefix_table;
/// use alice_match::NaturalEq;
///
/// assert_eq!(prefix_table(b"abcabc", &NaturalEq), [0, 0, 0, 1, 2, 3]);
/// ```
#[inline]
pub fn prefix_table<E, Q: Equivalence<E>>(query: &[E], eq: &Q) -> Vec<usize> {
    if query.is_empty() {
        return Vec::new();
    }

    let mut table = vec![0usize; query.len()];
    let mut j = 0;

    for i in 1..query.len() {
        while j > 0 && !eq.equiv(&query[i], &query[j]) {
            j = table[j - 1];
        }
        if eq.equiv(&query[i], &query[j]) {
            j += 1;
        }
        table[i] = j;
    }

    table
}

/// Smallest period of `seq` under `eq`: length minus the final border.
///
/// `seq` repeats with this period, possibly with a ragged tail.
/// `"abcabcab"` has period 3; a sequence with no repetition has period
/// equal to its length; the empty sequence has period 0.
#[inline]
pub fn smallest_period<E, Q: Equivalence<E>>(seq: &[E], eq: &Q) -> usize {
    match prefix_table(seq, eq).last() {
        Some(&border) => seq.len() - border,
        None => 0,
    }
}
