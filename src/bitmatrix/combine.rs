/*
 * @file combine.rs
 * @author Mike Hamburg
 * @copyright 2020-2022 Rambus Inc.
 *
 * OR-combination of candidate rows with zero-count thresholding.
 * This is the "generate children of a fixed mode" step: the zero
 * pattern of a combined mode is the OR of its parents' patterns, and
 * children with too few zeros are discarded before any dominance
 * sweep runs.  Zero-count filtering and dominance filtering are
 * separate pipeline stages.
 */

use crate::bitmatrix::storage::BitMatrix;

/** OR the fixed `left` row of `table` against each row listed in
 * `rights`, producing one combined row per entry in listed order.
 */
pub fn combine_rows(table:&BitMatrix, left:usize, rights:&[usize]) -> BitMatrix {
    let mut out = BitMatrix::new(table.width(), rights.len());
    for (k,&r) in rights.iter().enumerate() {
        let lrow = table.row(left);
        let rrow = table.row(r);
        for (o,(&a,&b)) in out.row_mut(k).iter_mut().zip(lrow.iter().zip(rrow.iter())) {
            *o = a | b;
        }
    }
    out
}

/** Combine as above, then return the 1-based positions within `rights`
 * of combined rows with at least `min_zeros` zero bits.
 */
pub fn combine_and_filter(
    table:&BitMatrix, left:usize, rights:&[usize], min_zeros:usize
) -> Vec<usize> {
    let produced = combine_rows(table, left, rights);
    produced.count_zero_bits_per_row().iter().enumerate()
        .filter(|&(_,&z)| z >= min_zeros)
        .map(|(k,_)| k+1)
        .collect()
}

/**************************************************************************
 * Tests
 **************************************************************************/

#[cfg(test)]
mod tests {
    use crate::bitmatrix::storage::BitMatrix;
    use crate::bitmatrix::combine::{combine_rows,combine_and_filter};

    fn table() -> BitMatrix {
        /* row0={0,1}, row1={1,2}, row2={4,5,6}, row3={} over width 8 */
        let mut t = BitMatrix::new(8,4);
        for &(x,y) in &[(0,0),(1,0),(1,1),(2,1),(4,2),(5,2),(6,2)] {
            t.set_bit(x,y);
        }
        t
    }

    #[test]
    fn test_combine_rows() {
        let t = table();
        let produced = combine_rows(&t, 0, &[1,2,3]);
        assert_eq!(produced.height(), 3);
        assert_eq!(produced.count_zero_bits_per_row(), vec![5,3,6]);
        /* left | empty == left */
        assert_eq!(produced.row(2), t.row(0));
    }

    /** Threshold is inclusive, and indices are 1-based into the list */
    #[test]
    fn test_combine_and_filter() {
        let t = table();
        assert_eq!(combine_and_filter(&t, 0, &[1,2,3], 5), vec![1,3]);
        assert_eq!(combine_and_filter(&t, 0, &[1,2,3], 6), vec![3]);
        assert_eq!(combine_and_filter(&t, 0, &[1,2,3], 0), vec![1,2,3]);
        assert_eq!(combine_and_filter(&t, 0, &[1,2,3], 7), Vec::<usize>::new());
        /* same right row listed twice is reported twice */
        assert_eq!(combine_and_filter(&t, 0, &[3,3], 6), vec![1,2]);
    }
}
