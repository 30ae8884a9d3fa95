/**
 * @file mod.rs
 * @author Mike Hamburg
 * @copyright 2020-2022 Rambus Inc.
 *
 * Dense bit-packed matrices and the dominance sweeps used to prune
 * redundant elementary-mode candidates.  Rows are compared as whole
 * word sequences, so everything here assumes the padding bits past
 * the logical width are kept zero.
 */
pub mod storage;
pub mod row;
pub mod sweep;
pub mod combine;
