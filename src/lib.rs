//! lut-2048: row slide/merge lookup-table generator
//!
//! This crate provides:
//! - The 1-D row transform primitive (`row::slide`): slide four tiles toward
//!   one end, merging equal adjacent tiles exactly once per cell per move.
//! - Table generation (`table` module): entries for all 65536 nibble-packed
//!   row codes, text serialization with an atomic rename, and validation of
//!   an existing table file.
//!
//! Quick start:
//! ```
//! use lut_2048::row::{slide, Direction};
//! use lut_2048::table::TableEntry;
//!
//! assert_eq!(slide([2, 0, 2, 2], Direction::Left), [4, 2, 0, 0]);
//!
//! // Everything the table stores for one input code:
//! let e = TableEntry::compute(0x2020);
//! assert_eq!((e.right, e.left, e.empty), (0x0003, 0x3000, 0b1010));
//! ```
pub mod row;
pub mod table;
