/*
 * @file row.rs
 * @author Mike Hamburg
 * @copyright 2020-2022 Rambus Inc.
 *
 * Relational predicates over packed rows.  These are free functions
 * over word slices so they work on rows of any matrix (owned or view)
 * and can be tested in isolation.  Both operands must have the same
 * length and zeroed padding bits.
 */

use crate::bitmatrix::storage::Word;

/** How two equal-width rows relate, bitwise.
 * A row is a subset of another if every set bit in it is also set
 * in the other.  `Equal` is subset-in-both-directions.
 */
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RowRelation {
    Unrelated,
    ASubsetOfB,
    BSubsetOfA,
    Equal
}

impl RowRelation {
    fn from_flags(a_sub:bool, b_sub:bool) -> Self {
        match (a_sub, b_sub) {
            (false,false) => RowRelation::Unrelated,
            (true, false) => RowRelation::ASubsetOfB,
            (false,true ) => RowRelation::BSubsetOfA,
            (true, true ) => RowRelation::Equal
        }
    }

    /** Is a a subset of b (possibly equal)? */
    #[inline(always)]
    pub fn a_subset_of_b(self) -> bool {
        matches!(self, RowRelation::ASubsetOfB | RowRelation::Equal)
    }

    /** Is b a subset of a (possibly equal)? */
    #[inline(always)]
    pub fn b_subset_of_a(self) -> bool {
        matches!(self, RowRelation::BSubsetOfA | RowRelation::Equal)
    }
}

/** Classify the relation between rows a and b.
 * Both subset accumulators are monotone, so the early exit once both
 * are false cannot change the result.
 */
pub fn classify(a:&[Word], b:&[Word]) -> RowRelation {
    debug_assert_eq!(a.len(), b.len());
    let (mut a_sub, mut b_sub) = (true, true);
    for (&wa,&wb) in a.iter().zip(b.iter()) {
        let common = wa & wb;
        a_sub &= common == wa;
        b_sub &= common == wb;
        if !a_sub && !b_sub { return RowRelation::Unrelated; }
    }
    RowRelation::from_flags(a_sub, b_sub)
}

/** One-directional test: is a a subset of b?
 * Cheaper than classify when the other direction is not needed.
 */
#[inline]
pub fn is_subset(a:&[Word], b:&[Word]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).all(|(&wa,&wb)| wa & wb == wa)
}

/** Number of set bits across all words of a row */
#[inline]
pub fn count_set_bits(row:&[Word]) -> usize {
    row.iter().map(|w| w.count_ones() as usize).sum()
}

/**************************************************************************
 * Tests
 **************************************************************************/
