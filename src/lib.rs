/*!
 * Packed bit-matrix kernel for elementary flux mode enumeration.
 *
 * Each candidate mode of a metabolic-network analysis is represented
 * by the zero pattern of its flux vector, packed one bit per reaction
 * into machine words ([`BitMatrix`]).  The enumeration generates new
 * candidates by OR-combining the patterns of existing ones
 * ([`combine_and_filter`]), and a candidate survives only if no other
 * surviving pattern is a bitwise subset of it: a superset row carries
 * fewer constraints and is redundant.  The crate's job is exactly that
 * pruning, done bit-parallel over whole words.
 *
 * # Dominance sweeps
 *
 * Four sweep variants cover the caller's pipeline stages:
 *
 * * [`check_rows`] — one matrix, previously accepted rows at the
 *   front, new candidates behind them.  New rows are eliminated among
 *   themselves and against the accepted rows; an accepted row can
 *   itself be retired when a strictly smaller new pattern appears.
 * * [`pre_check_rows`] — separate accepted (`zeros`) and candidate
 *   matrices; survivors of the self-pass are physically compacted to
 *   the front of the candidate matrix, and the remain flags are
 *   reported in the original row order.
 * * [`pre_check_rows3`] — drops a candidate only when more than two
 *   accepted rows dominate it.
 * * [`pre_check_rows4`] — caller-supplied first-differing-position
 *   hints and parent-row exclusions skip comparisons that cannot
 *   matter.
 *
 * All sweeps treat shape mismatches as programming errors; only the
 * array-import boundary in [`marshal`] validates and reports
 * ([`ShapeError`]).
 *
 * # The C boundary
 *
 * The original engine is a native extension loaded by a numerical
 * host environment.  With the `cffi` feature (default), the crate
 * builds as a cdylib exposing the same surface as plain C functions,
 * with a header generated by cbindgen.
 *
 * # Padding
 *
 * The predicates compare whole words, so the don't-care bits past the
 * logical width must be zero on both operands.  Every constructor,
 * importer and combiner in this crate keeps them zero; external
 * buffers wrapped as views must follow the same convention.
 */

/**
 * Packed rows, predicates and sweeps (internal; exposed for bench)
 */
pub mod bitmatrix;

pub mod marshal;

#[cfg(feature = "cffi")]
mod cffi;

pub use bitmatrix::storage::{BitMatrix,BitMatrixView,Word,WORD_BITS};
pub use bitmatrix::row::{RowRelation,classify,is_subset,count_set_bits};
pub use bitmatrix::sweep::{check_rows,pre_check_rows,pre_check_rows3,pre_check_rows4};
pub use bitmatrix::combine::{combine_rows,combine_and_filter};
pub use marshal::{ArraySource,ShapeError,import};
