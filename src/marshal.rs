/*
 * @file marshal.rs
 * @author Mike Hamburg
 * @copyright 2020-2022 Rambus Inc.
 *
 * Import of external 0/1 arrays into packed matrices.  Sources are
 * row-major with width*height elements.  Shape disagreements are
 * caught here so the engine underneath can stay precondition-only.
 * Importers only ever set bits; the target is assumed freshly
 * constructed (and therefore zeroed).
 */

use crate::bitmatrix::storage::BitMatrix;
use std::fmt;

/** Boundary validation failure */
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ShapeError {
    /** Source element count disagrees with the target's width*height */
    ElementCount { expected: usize, got: usize }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::ElementCount { expected, got } =>
                write!(f, "source has {} elements but the target matrix needs {}",
                       got, expected)
        }
    }
}

impl std::error::Error for ShapeError {}

/** A 0/1 source array in one of the two element types the callers feed us */
#[derive(Clone, Copy, Debug)]
pub enum ArraySource<'a> {
    Bytes(&'a [u8]),
    Doubles(&'a [f64])
}

fn check_len(target:&BitMatrix, got:usize) -> Result<(), ShapeError> {
    let expected = target.width() * target.height();
    if got != expected {
        return Err(ShapeError::ElementCount { expected, got });
    }
    Ok(())
}

/** Import a byte-per-bit source, four columns at a time where possible.
 * The quad path is only a throughput split: the result is bit-identical
 * to calling set_bit for every 1-valued cell.
 */
pub fn import_bytes(target:&mut BitMatrix, src:&[u8]) -> Result<(), ShapeError> {
    check_len(target, src.len())?;
    let width = target.width();
    for y in 0..target.height() {
        let row_src = &src[y*width .. (y+1)*width];
        let mut x = 0;
        while x+4 <= width {
            let quad = u32::from_le_bytes([row_src[x], row_src[x+1],
                                           row_src[x+2], row_src[x+3]]);
            target.or_quad(x, y, quad);
            x += 4;
        }
        while x < width {
            if row_src[x] == 1 { target.set_bit(x,y); }
            x += 1;
        }
    }
    Ok(())
}

/** Import a double source: exactly 1.0 means set, anything else unset.
 * Slower general fallback for non-byte data.
 */
pub fn import_doubles(target:&mut BitMatrix, src:&[f64]) -> Result<(), ShapeError> {
    check_len(target, src.len())?;
    let width = target.width();
    for y in 0..target.height() {
        for x in 0..width {
            if src[y*width + x] == 1.0 { target.set_bit(x,y); }
        }
    }
    Ok(())
}

/** Pick the import path from the source's element type */
pub fn import(target:&mut BitMatrix, source:ArraySource) -> Result<(), ShapeError> {
    match source {
        ArraySource::Bytes(src)   => import_bytes(target, src),
        ArraySource::Doubles(src) => import_doubles(target, src)
    }
}

/**************************************************************************
 * Tests
 **************************************************************************/

#[cfg(test)]
mod tests {
    use crate::bitmatrix::storage::BitMatrix;
    use crate::marshal::{ArraySource,ShapeError,import,import_bytes,import_doubles};
    use rand::{Rng,thread_rng};

    /** Both importers and the reference per-cell loop must agree */
    #[test]
    fn test_import_equivalence() {
        for _ in 0..50 {
            let width  = thread_rng().gen_range(1..130);
            let height = thread_rng().gen_range(1..10);
            let bytes : Vec<u8> = (0..width*height)
                .map(|_| thread_rng().gen::<bool>() as u8).collect();
            let doubles : Vec<f64> = bytes.iter().map(|&b| b as f64).collect();

            let mut reference = BitMatrix::new(width,height);
            for y in 0..height {
                for x in 0..width {
                    if bytes[y*width+x] == 1 { reference.set_bit(x,y); }
                }
            }

            let mut from_bytes = BitMatrix::new(width,height);
            import_bytes(&mut from_bytes, &bytes).unwrap();
            assert_eq!(from_bytes, reference);

            let mut from_doubles = BitMatrix::new(width,height);
            import_doubles(&mut from_doubles, &doubles).unwrap();
            assert_eq!(from_doubles, reference);

            let mut dispatched = BitMatrix::new(width,height);
            import(&mut dispatched, ArraySource::Bytes(&bytes)).unwrap();
            assert_eq!(dispatched, reference);
        }
    }

    /** Doubles that are not exactly 1.0 are unset */
    #[test]
    fn test_doubles_exactness() {
        let src = [1.0, 0.0, 0.5, -1.0, 1.0+f64::EPSILON, 1.0];
        let mut m = BitMatrix::new(6,1);
        import_doubles(&mut m, &src).unwrap();
        for x in 0..6 {
            assert_eq!(m.get_bit(x,0), x==0 || x==5);
        }
    }

    #[test]
    fn test_shape_mismatch() {
        let mut m = BitMatrix::new(5,3);
        assert_eq!(import_bytes(&mut m, &[0u8; 14]),
                   Err(ShapeError::ElementCount { expected:15, got:14 }));
        assert_eq!(import_doubles(&mut m, &[0.0; 16]),
                   Err(ShapeError::ElementCount { expected:15, got:16 }));
        assert!(import_bytes(&mut m, &[0u8; 15]).is_ok());
    }
}
