/*
 * @file sweep.rs
 * @author Mike Hamburg
 * @copyright 2020-2022 Rambus Inc.
 *
 * Dominance-filtering sweeps over candidate rows.  A row that is a
 * bitwise superset of another relevant row is redundant (less
 * constrained) and is dropped; subsets win.  All four variants return
 * a remain vector indexed by the candidate rows: true = keep.
 *
 * These are trusted-caller kernels: mismatched shapes are programming
 * errors, checked only by debug_assert.
 */

use crate::bitmatrix::storage::BitMatrix;
use crate::bitmatrix::row;

/** Pairwise new-vs-new elimination over rows `old..height` of `m`,
 * shared by the sweeps below.  On a drop of the outer row we keep
 * scanning rather than restarting; the accumulated drops are monotone
 * so the result is the same, and it measured faster.
 */
fn eliminate_among_new(m:&BitMatrix, old:usize, remain:&mut [bool]) {
    let h = m.height();
    for i in old..h {
        for j in i+1..h {
            if !(remain[i] && remain[j]) { continue; }
            let rel = row::classify(m.row(i), m.row(j));
            if rel.b_subset_of_a() {
                remain[i] = false;
            } else if rel.a_subset_of_b() {
                remain[j] = false;
            }
        }
    }
}

/** Full self-and-cross check over one matrix whose first `old` rows
 * were validated by a prior call.  Pass 1 eliminates among the new
 * rows; pass 2 runs every (old,new) pair.  In pass 2 an old row that
 * turns out to be a superset of a new row is itself dropped: a new
 * row can retire a previously accepted one.
 */
pub fn check_rows(m:&BitMatrix, old:usize) -> Vec<bool> {
    debug_assert!(old <= m.height());
    let h = m.height();
    let mut remain = vec![true; h];

    eliminate_among_new(m, old, &mut remain);

    /* New vs old.  Runs over every pair regardless of pass-1 survival;
     * the old-subset direction is deliberately tested first. */
    for i in 0..old {
        for j in old..h {
            let rel = row::classify(m.row(i), m.row(j));
            if rel.a_subset_of_b() {
                remain[j] = false;
            } else if rel.b_subset_of_a() {
                remain[i] = false;
            }
        }
    }
    remain
}

/** Precheck-and-compact: filter `new_rows` against itself and against
 * the accepted rows in `zeros`, physically compacting the survivors of
 * the self-pass to the front of `new_rows` (in their original order) as
 * a side effect.  The returned remain vector is indexed by the original
 * pre-compaction row positions.
 */
pub fn pre_check_rows(zeros:&BitMatrix, new_rows:&mut BitMatrix) -> Vec<bool> {
    debug_assert_eq!(zeros.row_words(), new_rows.row_words());
    let h = new_rows.height();

    /* Remain slots hold 1-based original indices, so that after the
     * compaction each surviving slot still knows where it came from. */
    let mut remain : Vec<usize> = (1..=h).collect();
    for i in 0..h {
        for j in i+1..h {
            if remain[i] == 0 || remain[j] == 0 { continue; }
            let rel = row::classify(new_rows.row(i), new_rows.row(j));
            if rel.b_subset_of_a() {
                remain[i] = 0;
            } else if rel.a_subset_of_b() {
                remain[j] = 0;
            }
        }
    }

    /* Walk back to front; `size` is the contiguous surviving run seen
     * so far.  Each hole pulls that run down one row, for the index
     * slots and the packed rows alike. */
    let mut size = 0;
    for j in (0..h).rev() {
        if remain[j] != 0 {
            size += 1;
        } else if size > 0 {
            remain.copy_within(j+1 .. j+1+size, j);
            new_rows.move_rows(j+1, j, size);
        }
    }

    /* Old vs compacted new: a candidate dominated by any accepted row
     * is out.  Old rows are never dropped here. */
    for j in 0..size {
        if remain[j] == 0 { continue; }
        for i in 0..zeros.height() {
            if row::is_subset(zeros.row(i), new_rows.row(j)) {
                remain[j] = 0;
                break;
            }
        }
    }

    /* Scatter the flags back to original positions.  Forwarding targets
     * never collide and never precede their slot, so the back-to-front
     * walk reads each slot before anything lands on it. */
    for r in remain[size..h].iter_mut() { *r = 0; }
    for j in (0..size).rev() {
        if remain[j] != 0 {
            let f = remain[j]-1;
            remain[j] = 0;
            remain[f] = 1;
        }
    }
    remain.iter().map(|&r| r != 0).collect()
}

/** Threshold precheck: self-elimination as usual (no compaction), then
 * a candidate is dropped only if more than two accepted rows dominate
 * it.  The count stops as soon as it reaches three.
 */
pub fn pre_check_rows3(zeros:&BitMatrix, new_rows:&BitMatrix) -> Vec<bool> {
    debug_assert_eq!(zeros.row_words(), new_rows.row_words());
    let h = new_rows.height();
    let mut remain = vec![true; h];

    eliminate_among_new(new_rows, 0, &mut remain);

    for j in 0..h {
        if !remain[j] { continue; }
        let mut numout = 0;
        let mut i = 0;
        while i < zeros.height() && numout < 3 {
            if row::is_subset(zeros.row(i), new_rows.row(j)) {
                numout += 1;
            }
            i += 1;
        }
        if numout > 2 { remain[j] = false; }
    }
    remain
}

/** First-difference-accelerated precheck.
 *
 * Self-pass: each candidate j is compared against every earlier row i.
 * Once j is dead, the full two-directional classify is replaced by the
 * one-directional test that can still kill i; the surviving set is the
 * same as the plain elimination, only the unused half of the word loop
 * is saved.  Old-pass: `old_first`/`new_first` are the caller's
 * per-row first-differing positions; an old row with
 * `new_first[j] > old_first[i]` cannot dominate candidate j and is
 * skipped without touching the bits.  `comb_left` and `comb_z[j]` are
 * old-row indices structurally tied to candidate j (its parents) and
 * are skipped unconditionally; pass usize::MAX for no such row.  The
 * old-pass stops at the first dominating row.
 */
pub fn pre_check_rows4(
    zeros:&BitMatrix, new_rows:&BitMatrix,
    old_first:&[u8], new_first:&[u8],
    comb_left:usize, comb_z:&[usize]
) -> Vec<bool> {
    debug_assert_eq!(zeros.row_words(), new_rows.row_words());
    debug_assert_eq!(old_first.len(), zeros.height());
    debug_assert_eq!(new_first.len(), new_rows.height());
    debug_assert_eq!(comb_z.len(), new_rows.height());
    let h = new_rows.height();
    let mut remain = vec![true; h];

    for j in 1..h {
        for i in 0..j {
            if !remain[i] { continue; }
            if remain[j] {
                let rel = row::classify(new_rows.row(i), new_rows.row(j));
                if rel.b_subset_of_a() {
                    remain[i] = false;
                } else if rel.a_subset_of_b() {
                    remain[j] = false;
                    /* keep scanning: later rows can still lose to j */
                }
            } else if row::is_subset(new_rows.row(j), new_rows.row(i)) {
                remain[i] = false;
            }
        }
    }

    for j in 0..h {
        if !remain[j] { continue; }
        let jf = new_first[j];
        for i in 0..zeros.height() {
            if i == comb_left || i == comb_z[j] { continue; }
            if jf > old_first[i] { continue; }
            if row::is_subset(zeros.row(i), new_rows.row(j)) {
                remain[j] = false;
                break;
            }
        }
    }
    remain
}

/**************************************************************************
 * Tests
 **************************************************************************/
