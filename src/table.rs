//! Row lookup-table generation per the classic 16-bit packed-row scheme.
//!
//! Every possible row fits in 16 bits: four 4-bit nibbles, most-significant
//! first, each holding a tile exponent (0 = empty, k > 0 = tile 2^k). The
//! table has one entry per code, 65536 in all, written as plain text:
//!
//!   <right-code> <left-code> <empty-mask>\n
//!
//! `right-code`/`left-code` are the exponent-packed encodings of the row
//! after sliding right/left. `empty-mask` has bit i set iff the input nibble
//! at position i (counting from the most-significant nibble) is zero.
//!
//! Codes are re-encoded with plain shift arithmetic, not masked to 16 bits:
//! merging two 32768 tiles yields exponent 16, which overflows the top nibble
//! and produces a code above 65535. Consumers of the table expect exactly
//! those values.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use rayon::prelude::*;
use tempfile::NamedTempFile;

use crate::row::{slide, Direction, Tile, ROW_LEN};

/// 65,536 possible 16-bit rows.
pub const TABLE_SIZE: usize = 0x1_0000;

#[derive(thiserror::Error, Debug)]
pub enum TableError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("could not persist table file: {0}")]
    Persist(String),
    #[error("malformed table line {0}")]
    Malformed(usize),
    #[error("table line {0} does not match recomputation")]
    Mismatch(usize),
    #[error("expected 65536 lines, found {0}")]
    LineCount(usize),
}

/// One table line: slide results for both directions plus the empty mask of
/// the input row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    pub right: u32,
    pub left: u32,
    pub empty: u8,
}

impl TableEntry {
    /// Compute the entry for one input code.
    ///
    /// ```
    /// use lut_2048::table::TableEntry;
    ///
    /// // 0x0002 decodes to [0, 0, 0, 4]: already flush right, slides left
    /// // to [4, 0, 0, 0] (0x2000), and the first three cells are empty.
    /// let e = TableEntry::compute(0x0002);
    /// assert_eq!((e.right, e.left, e.empty), (0x0002, 0x2000, 0b0111));
    /// ```
    pub fn compute(code: u16) -> Self {
        let row = decode_row(code);
        TableEntry {
            right: encode_row(slide(row, Direction::Right)),
            left: encode_row(slide(row, Direction::Left)),
            empty: empty_mask(code),
        }
    }
}

/// Unpack a 16-bit code into tile values, most-significant nibble first.
pub fn decode_row(code: u16) -> [Tile; ROW_LEN] {
    let mut row = [0; ROW_LEN];
    for (i, cell) in row.iter_mut().enumerate() {
        let exp = (code >> (12 - 4 * i)) & 0xf;
        *cell = if exp == 0 { 0 } else { 1u32 << exp };
    }
    row
}

/// Pack tile values back into exponent form. Inverse of `decode_row` for
/// in-range rows; exponent 16 (a merged 65536 tile) deliberately carries past
/// the nibble boundary.
pub fn encode_row(row: [Tile; ROW_LEN]) -> u32 {
    row.iter().fold(0, |code, &tile| (code << 4) + exponent(tile))
}

#[inline]
fn exponent(tile: Tile) -> u32 {
    if tile == 0 {
        0
    } else {
        tile.trailing_zeros()
    }
}

/// Bitmask of empty input cells: bit i set iff nibble i (from the
/// most-significant end) is zero. Always in [0, 15].
pub fn empty_mask(code: u16) -> u8 {
    (0..ROW_LEN).fold(0, |mask, i| {
        if (code >> (12 - 4 * i)) & 0xf == 0 {
            mask | (1 << i)
        } else {
            mask
        }
    })
}

/// Compute all 65536 entries in code order. Entries are independent, so they
/// are computed in parallel; the indexed collect keeps the output ordered.
pub fn build_table() -> Vec<TableEntry> {
    build_table_with(|| {})
}

/// Like `build_table`, invoking `tick` once per computed entry (from worker
/// threads) so callers can drive a progress bar without giving up the
/// parallel build.
pub fn build_table_with<F: Fn() + Sync>(tick: F) -> Vec<TableEntry> {
    (0..TABLE_SIZE as u32)
        .into_par_iter()
        .map(|code| {
            let entry = TableEntry::compute(code as u16);
            tick();
            entry
        })
        .collect()
}

/// Write the table as text, one entry per line in code order.
///
/// The file is staged in a named temp file next to the destination and
/// renamed into place on success, so a failed run never leaves a partial
/// table at `path`.
pub fn write_table<P: AsRef<Path>>(path: P, entries: &[TableEntry]) -> Result<(), TableError> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir)?;
    {
        let mut w = BufWriter::new(tmp.as_file());
        for e in entries {
            writeln!(w, "{} {} {}", e.right, e.left, e.empty)?;
        }
        w.flush()?;
    }
    tmp.persist(path)
        .map_err(|e| TableError::Persist(e.to_string()))?;
    Ok(())
}

/// Re-read a table file and check every line against a fresh recomputation.
pub fn validate_table<P: AsRef<Path>>(path: P) -> Result<(), TableError> {
    let reader = BufReader::new(File::open(path)?);
    let mut lines_seen = 0usize;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        lines_seen += 1;
        if idx >= TABLE_SIZE {
            // Past the expected end; keep counting for the error report.
            continue;
        }
        let got = parse_line(&line).ok_or(TableError::Malformed(idx))?;
        if got != TableEntry::compute(idx as u16) {
            return Err(TableError::Mismatch(idx));
        }
    }
    if lines_seen != TABLE_SIZE {
        return Err(TableError::LineCount(lines_seen));
    }
    Ok(())
}

fn parse_line(line: &str) -> Option<TableEntry> {
    let mut fields = line.split_whitespace();
    let right = fields.next()?.parse().ok()?;
    let left = fields.next()?.parse().ok()?;
    let empty = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(TableEntry { right, left, empty })
}
