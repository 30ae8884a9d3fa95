/*
 * @file cffi.rs
 * @author Mike Hamburg
 * @copyright 2020-2022 Rambus Inc.
 *
 * C foreign function interface.  This is the surface the numerical
 * host environment loads; it mirrors the procedural API of the
 * original native extension.  Remain vectors are written into
 * caller-provided byte buffers, one byte per candidate row.
 */

use crate::bitmatrix::storage::BitMatrix;
use crate::bitmatrix::sweep::{check_rows,pre_check_rows,pre_check_rows3,pre_check_rows4};
use crate::bitmatrix::combine::combine_and_filter;
use crate::marshal::{import_bytes,import_doubles};
use core::ptr::NonNull;
use core::slice::{from_raw_parts,from_raw_parts_mut};

fn write_remain(remain: &[bool], out: *mut u8) {
    let out = unsafe { from_raw_parts_mut(out, remain.len()) };
    for (o,&r) in out.iter_mut().zip(remain.iter()) {
        *o = r as u8;
    }
}

#[no_mangle]
/// Create a new zeroed bit matrix
pub extern fn pmx_bitmatrix_new(width: usize, height: usize) -> *mut BitMatrix {
    Box::into_raw(Box::new(BitMatrix::new(width,height)))
}

#[no_mangle]
/// Destroy and free a bit matrix
pub unsafe extern fn pmx_bitmatrix_free(ptr: *mut BitMatrix) {
    if !ptr.is_null() { drop(Box::from_raw(ptr)); }
}

#[no_mangle]
/// Number of logical columns
pub unsafe extern fn pmx_bitmatrix_width(ptr: NonNull<BitMatrix>) -> usize {
    ptr.as_ref().width()
}

#[no_mangle]
/// Number of rows
pub unsafe extern fn pmx_bitmatrix_height(ptr: NonNull<BitMatrix>) -> usize {
    ptr.as_ref().height()
}

#[no_mangle]
/// Read one bit
pub unsafe extern fn pmx_bitmatrix_get_bit(ptr: NonNull<BitMatrix>,
        x: usize, y: usize) -> bool {
    ptr.as_ref().get_bit(x,y)
}

#[no_mangle]
/// Set one bit
pub unsafe extern fn pmx_bitmatrix_set_bit(mut ptr: NonNull<BitMatrix>,
        x: usize, y: usize) {
    ptr.as_mut().set_bit(x,y);
}

#[no_mangle]
/// Clear one bit
pub unsafe extern fn pmx_bitmatrix_clear_bit(mut ptr: NonNull<BitMatrix>,
        x: usize, y: usize) {
    ptr.as_mut().clear_bit(x,y);
}

#[no_mangle]
/// Import a row-major byte-per-bit 0/1 array.  Return false if the
/// element count doesn't match the matrix shape.
pub unsafe extern fn pmx_bitmatrix_import_bytes(mut ptr: NonNull<BitMatrix>,
        src: *const u8, src_len: usize) -> bool {
    import_bytes(ptr.as_mut(), from_raw_parts(src,src_len)).is_ok()
}

#[no_mangle]
/// Import a row-major double 0/1 array (exactly 1.0 means set).
/// Return false if the element count doesn't match the matrix shape.
pub unsafe extern fn pmx_bitmatrix_import_doubles(mut ptr: NonNull<BitMatrix>,
        src: *const f64, src_len: usize) -> bool {
    import_doubles(ptr.as_mut(), from_raw_parts(src,src_len)).is_ok()
}

#[no_mangle]
/// Write the per-row zero-bit counts into out (height entries)
pub unsafe extern fn pmx_bitmatrix_count_zero_bits(ptr: NonNull<BitMatrix>,
        out: *mut usize) {
    let counts = ptr.as_ref().count_zero_bits_per_row();
    from_raw_parts_mut(out, counts.len()).copy_from_slice(&counts);
}

#[no_mangle]
/// Full self-and-cross dominance check with `old` validated rows at the
/// front.  Writes height bytes of 0/1 remain flags into out.
pub unsafe extern fn pmx_check_rows(ptr: NonNull<BitMatrix>, old: usize,
        out: *mut u8) {
    write_remain(&check_rows(ptr.as_ref(), old), out);
}

#[no_mangle]
/// Precheck-and-compact: filters new_rows against itself and zeros,
/// compacting new_rows in place.  Writes new_rows-height bytes of
/// remain flags (original row order) into out.
pub unsafe extern fn pmx_pre_check_rows(zeros: NonNull<BitMatrix>,
        mut new_rows: NonNull<BitMatrix>, out: *mut u8) {
    write_remain(&pre_check_rows(zeros.as_ref(), new_rows.as_mut()), out);
}

#[no_mangle]
/// Threshold precheck: drop a candidate dominated by more than two
/// accepted rows.  Writes new_rows-height bytes of remain flags.
pub unsafe extern fn pmx_pre_check_rows3(zeros: NonNull<BitMatrix>,
        new_rows: NonNull<BitMatrix>, out: *mut u8) {
    write_remain(&pre_check_rows3(zeros.as_ref(), new_rows.as_ref()), out);
}

#[no_mangle]
/// First-difference-accelerated precheck.  old_first has one entry per
/// zeros row, new_first and comb_z one per new row; comb_left and
/// comb_z entries are old-row indices excluded from comparison
/// (pass SIZE_MAX for none).  Writes new_rows-height remain bytes.
pub unsafe extern fn pmx_pre_check_rows4(zeros: NonNull<BitMatrix>,
        new_rows: NonNull<BitMatrix>,
        old_first: *const u8, new_first: *const u8,
        comb_left: usize, comb_z: *const usize, out: *mut u8) {
    let zeros = zeros.as_ref();
    let new_rows = new_rows.as_ref();
    let remain = pre_check_rows4(zeros, new_rows,
        from_raw_parts(old_first, zeros.height()),
        from_raw_parts(new_first, new_rows.height()),
        comb_left,
        from_raw_parts(comb_z, new_rows.height()));
    write_remain(&remain, out);
}

#[no_mangle]
/// OR row `left` of the table against each of the n_rights listed rows
/// and write the 1-based positions of results with at least min_zeros
/// zero bits into out (capacity n_rights).  Returns how many were written.
pub unsafe extern fn pmx_combine_and_filter(table: NonNull<BitMatrix>,
        left: usize, rights: *const usize, n_rights: usize,
        min_zeros: usize, out: *mut usize) -> usize {
    let keep = combine_and_filter(table.as_ref(), left,
        from_raw_parts(rights, n_rights), min_zeros);
    from_raw_parts_mut(out, n_rights)[..keep.len()].copy_from_slice(&keep);
    keep.len()
}
