/*
 * @file storage.rs
 * @author Mike Hamburg
 * @copyright 2020-2022 Rambus Inc.
 *
 * Bit-packed matrix storage.  Each row of the matrix occupies
 * `row_words` consecutive machine words; bit (x,y) lives in word
 * `y*row_words + x/64` under mask `1 << (x%64)`.  Padding bits past
 * the logical width are kept zero by every constructor and mutator
 * in this crate, because the row predicates compare whole words.
 */

use rand::{Rng,thread_rng};

pub type Word = u64;
pub const WORD_BITS : usize = Word::BITS as usize;

/** Return the number of words required to hold n bits, rounded up */
pub const fn words_spanning(n:usize) -> usize {
    (n+WORD_BITS-1) / WORD_BITS
}

/** Translate a logical column into (word offset within the row, single-bit mask) */
#[inline(always)]
pub const fn address(x:usize) -> (usize, Word) {
    (x/WORD_BITS, 1 << (x%WORD_BITS))
}

/** Bit matrix owning its storage.  Created zeroed. */
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BitMatrix {
    width     : usize,
    height    : usize,
    row_words : usize,
    words     : Vec<Word>
}

impl BitMatrix {
    /** Create a new zero matrix with `width` logical columns and `height` rows */
    pub fn new(width:usize, height:usize) -> BitMatrix {
        let row_words = words_spanning(width);
        let words = vec![0; row_words.checked_mul(height).unwrap()];
        BitMatrix { width, height, row_words, words }
    }

    /** Adopt a caller-built buffer.  Its length must be a multiple of the row stride */
    pub fn from_words(width:usize, words:Vec<Word>) -> BitMatrix {
        let row_words = words_spanning(width);
        assert!(row_words > 0 && words.len() % row_words == 0);
        let height = words.len() / row_words;
        BitMatrix { width, height, row_words, words }
    }

    /** Give the buffer back to the caller without copying */
    pub fn into_words(self) -> Vec<Word> { self.words }

    pub fn width(&self)     -> usize { self.width }
    pub fn height(&self)    -> usize { self.height }
    pub fn row_words(&self) -> usize { self.row_words }

    /** Borrow one row as a word slice */
    #[inline(always)]
    pub fn row(&self, y:usize) -> &[Word] {
        &self.words[y*self.row_words .. (y+1)*self.row_words]
    }

    /** Borrow one row mutably */
    #[inline(always)]
    pub fn row_mut(&mut self, y:usize) -> &mut [Word] {
        &mut self.words[y*self.row_words .. (y+1)*self.row_words]
    }

    /** Return a single bit */
    #[inline(always)]
    pub fn get_bit(&self, x:usize, y:usize) -> bool {
        debug_assert!(x < self.width && y < self.height);
        let (w,mask) = address(x);
        self.words[y*self.row_words + w] & mask != 0
    }

    /** Set a single bit */
    #[inline(always)]
    pub fn set_bit(&mut self, x:usize, y:usize) {
        debug_assert!(x < self.width && y < self.height);
        let (w,mask) = address(x);
        self.words[y*self.row_words + w] |= mask;
    }

    /** Clear a single bit */
    #[inline(always)]
    pub fn clear_bit(&mut self, x:usize, y:usize) {
        debug_assert!(x < self.width && y < self.height);
        let (w,mask) = address(x);
        self.words[y*self.row_words + w] &= !mask;
    }

    /** OR four 0/1-valued little-endian bytes into columns x..x+4 of row y.
     * Bulk-load fast path for byte-per-bit sources; requires x+3 < width.
     */
    #[inline(always)]
    pub fn or_quad(&mut self, x:usize, y:usize, quad:u32) {
        debug_assert!(x+3 < self.width && y < self.height);
        debug_assert!(quad & !0x01010101 == 0);
        /* Gather bit 0 of each byte into a nibble */
        let nibble = (quad | (quad>>7) | (quad>>14) | (quad>>21)) & 0xF;
        let (w,bit) = (x/WORD_BITS, x%WORD_BITS);
        let row = self.row_mut(y);
        row[w] |= (nibble as Word) << bit;
        if bit+4 > WORD_BITS {
            row[w+1] |= (nibble as Word) >> (WORD_BITS-bit);
        }
    }

    /** Shift `count` rows starting at `src` down to start at `dst`.
     * Overlap is fine; used by the compacting sweep.
     */
    pub(crate) fn move_rows(&mut self, src:usize, dst:usize, count:usize) {
        let rw = self.row_words;
        self.words.copy_within(src*rw .. (src+count)*rw, dst*rw);
    }

    /** Borrow self as a read-only view */
    pub fn as_view(&self) -> BitMatrixView {
        BitMatrixView {
            width: self.width, height: self.height,
            row_words: self.row_words, words: &self.words
        }
    }

    /** Per-row count of zero bits within the logical width */
    pub fn count_zero_bits_per_row(&self) -> Vec<usize> {
        self.as_view().count_zero_bits_per_row()
    }

    /** Randomize the matrix, for testing and benchmarking purposes */
    #[allow(dead_code)]
    pub fn randomize(&mut self) {
        let pad_mask : Word = if self.width % WORD_BITS != 0 {
            (1 << (self.width % WORD_BITS)) - 1
        } else {
            !0
        };
        let rw = self.row_words;
        for (i,w) in self.words.iter_mut().enumerate() {
            *w = thread_rng().gen::<Word>();
            if rw > 0 && i % rw == rw-1 { *w &= pad_mask; }
        }
    }
}

/** Read-only view over externally owned packed rows.
 * Never frees; the borrow checker replaces the original's
 * wrap/deallocate teardown pairing.
 */
#[derive(Clone, Copy, Debug)]
pub struct BitMatrixView<'a> {
    width     : usize,
    height    : usize,
    row_words : usize,
    words     : &'a [Word]
}

impl <'a> BitMatrixView<'a> {
    /** Wrap a whole buffer; the height is inferred from its length */
    pub fn wrap(words:&'a [Word], width:usize) -> Self {
        let row_words = words_spanning(width);
        assert!(row_words > 0 && words.len() % row_words == 0);
        let height = words.len() / row_words;
        BitMatrixView { width, height, row_words, words }
    }

    /** Wrap only the first `height` rows of a larger buffer */
    pub fn wrap_prefix(words:&'a [Word], width:usize, height:usize) -> Self {
        let row_words = words_spanning(width);
        assert!(height.checked_mul(row_words).unwrap() <= words.len());
        BitMatrixView { width, height, row_words, words }
    }

    pub fn width(&self)     -> usize { self.width }
    pub fn height(&self)    -> usize { self.height }
    pub fn row_words(&self) -> usize { self.row_words }

    /** Borrow one row as a word slice */
    #[inline(always)]
    pub fn row(&self, y:usize) -> &'a [Word] {
        &self.words[y*self.row_words .. (y+1)*self.row_words]
    }

    /** Return a single bit */
    #[inline(always)]
    pub fn get_bit(&self, x:usize, y:usize) -> bool {
        debug_assert!(x < self.width && y < self.height);
        let (w,mask) = address(x);
        self.words[y*self.row_words + w] & mask != 0
    }

    /** Per-row count of zero bits within the logical width */
    pub fn count_zero_bits_per_row(&self) -> Vec<usize> {
        (0..self.height)
            .map(|y| self.width - crate::bitmatrix::row::count_set_bits(self.row(y)))
            .collect()
    }
}

/**************************************************************************
 * Tests
 **************************************************************************/

#[cfg(test)]
mod tests {
    use crate::bitmatrix::storage::{BitMatrix,BitMatrixView,WORD_BITS,address};
    use rand::{Rng,thread_rng};

    /** Set/get/clear round-trips and leaves other coordinates alone */
    #[test]
    fn test_bit_roundtrip() {
        for _ in 0..20 {
            let width  = thread_rng().gen_range(1..200);
            let height = thread_rng().gen_range(1..20);
            let mut m = BitMatrix::new(width,height);
            let x = thread_rng().gen_range(0..width);
            let y = thread_rng().gen_range(0..height);

            m.set_bit(x,y);
            assert!(m.get_bit(x,y));
            for xx in 0..width {
                for yy in 0..height {
                    assert_eq!(m.get_bit(xx,yy), (xx,yy)==(x,y));
                }
            }
            m.clear_bit(x,y);
            assert!(!m.get_bit(x,y));
            assert_eq!(m, BitMatrix::new(width,height));
        }
    }

    #[test]
    fn test_address() {
        assert_eq!(address(0), (0,1));
        assert_eq!(address(WORD_BITS-1), (0, 1<<(WORD_BITS-1)));
        assert_eq!(address(WORD_BITS),   (1, 1));
        assert_eq!(address(3*WORD_BITS+5), (3, 1<<5));
    }

    /** or_quad must agree with setting the four bits individually,
     * including across a word boundary.
     */
    #[test]
    fn test_or_quad() {
        let width = WORD_BITS + 8;
        for x0 in 0..width-3 {
            for quad_bits in 0..16u32 {
                let quad = (quad_bits & 1)
                    | ((quad_bits>>1) & 1) << 8
                    | ((quad_bits>>2) & 1) << 16
                    | ((quad_bits>>3) & 1) << 24;
                let mut a = BitMatrix::new(width,2);
                let mut b = BitMatrix::new(width,2);
                a.or_quad(x0, 1, quad);
                for bit in 0..4 {
                    if (quad_bits >> bit) & 1 != 0 { b.set_bit(x0+bit as usize, 1); }
                }
                assert_eq!(a,b);
            }
        }
    }

    /** Views expose a prefix of a larger buffer without copying */
    #[test]
    fn test_view_prefix() {
        let mut m = BitMatrix::new(70, 5);
        m.set_bit(65, 1);
        m.set_bit(0, 4);
        let words = m.clone().into_words();
        let full = BitMatrixView::wrap(&words, 70);
        assert_eq!(full.height(), 5);
        assert!(full.get_bit(65,1));
        let pre = BitMatrixView::wrap_prefix(&words, 70, 2);
        assert_eq!(pre.height(), 2);
        assert!(pre.get_bit(65,1));
        assert_eq!(pre.count_zero_bits_per_row(), vec![70,69]);

        let back = BitMatrix::from_words(70, words);
        assert_eq!(back, m);
    }

    /** Randomize must keep the padding bits zero */
    #[test]
    fn test_randomize_padding() {
        for width in [1usize, 7, 64, 65, 100] {
            let mut m = BitMatrix::new(width, 9);
            m.randomize();
            let zeros = m.count_zero_bits_per_row();
            for y in 0..m.height() {
                let ones : usize = m.row(y).iter()
                    .map(|w| w.count_ones() as usize).sum();
                assert_eq!(ones + zeros[y], width);
            }
        }
    }
}
