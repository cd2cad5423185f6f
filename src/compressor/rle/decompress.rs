use crate::compressor::CompressionError;
use crate::converter::{
    config::{MAX_OUTPUT_HEIGHT, MAX_OUTPUT_WIDTH},
    AsciiGrid, AsciiPixel,
};

use super::{CompressedGrid, RleEntry};

/// Expands a `CompressedGrid`, checking it against its declared dimensions.
pub fn decompress_grid(compressed: &CompressedGrid) -> Result<AsciiGrid, CompressionError> {
    if compressed.width == 0 || compressed.height == 0 {
        return Ok(Vec::new());
    }

    if compressed.width > MAX_OUTPUT_WIDTH || compressed.height > MAX_OUTPUT_HEIGHT {
        return Err(CompressionError::Decompression(format!(
            "Grid of {}x{} exceeds {}x{}",
            compressed.width, compressed.height, MAX_OUTPUT_WIDTH, MAX_OUTPUT_HEIGHT
        )));
    }

    if compressed.rows.len() != compressed.height as usize {
        return Err(CompressionError::Decompression(format!(
            "Grid has {} rows but expected {}",
            compressed.rows.len(), compressed.height
        )));
    }

    let width = compressed.width as usize;
    compressed
        .rows
        .iter()
        .enumerate()
        .map(|(index, entries)| {
            let row = decompress_row(index, entries, width)?;
            if row.len() != width {
                return Err(CompressionError::Decompression(format!(
                    "Row {} has length {} but expected {}",
                    index, row.len(), width
                )));
            }
            Ok(row)
        })
        .collect()
}

/// Runs are checked against `width` before they are expanded.
fn decompress_row(index: usize, entries: &[RleEntry], width: usize) -> Result<Vec<AsciiPixel>, CompressionError> {
    let mut row = Vec::new();

    for entry in entries {
        if entry.count == 0 {
            return Err(CompressionError::Decompression("Invalid RLE entry with count 0".into()));
        }

        let length = row.len().saturating_add(entry.count as usize);
        if length > width {
            return Err(CompressionError::Decompression(format!(
                "Row {} has length {} but expected {}",
                index, length, width
            )));
        }
        row.extend(std::iter::repeat(entry.pixel.clone()).take(entry.count as usize));
    }

    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compressor::rle::compress_grid;

    fn entry(count: u32, character: char) -> RleEntry {
        RleEntry { count, pixel: AsciiPixel::plain(character) }
    }

    #[test]
    fn empty_grid() {
        let decompressed = decompress_grid(&CompressedGrid::new(0, 0, false)).unwrap();
        assert!(decompressed.is_empty());
    }

    #[test]
    fn expands_runs() {
        let mut compressed = CompressedGrid::new(3, 2, false);
        compressed.rows.push(vec![entry(2, 'A'), entry(1, 'B')]);
        compressed.rows.push(vec![entry(3, 'C')]);

        let grid = decompress_grid(&compressed).unwrap();
        let lines: Vec<String> = grid
            .iter()
            .map(|row| row.iter().map(|pixel| pixel.character).collect())
            .collect();
        assert_eq!(lines, vec!["AAB", "CCC"]);
        assert_eq!(compress_grid(&grid).unwrap(), compressed);
    }

    #[test]
    fn zero_count_is_rejected() {
        let mut compressed = CompressedGrid::new(1, 1, false);
        compressed.rows.push(vec![entry(0, 'A')]);
        assert!(decompress_grid(&compressed).is_err());
    }

    #[test]
    fn row_length_mismatch_is_rejected() {
        let mut compressed = CompressedGrid::new(4, 1, false);
        compressed.rows.push(vec![entry(3, 'A')]);
        let err = decompress_grid(&compressed).unwrap_err();
        assert!(err.to_string().contains("Row 0 has length 3 but expected 4"));
    }

    #[test]
    fn oversized_run_is_rejected_before_expansion() {
        let mut compressed = CompressedGrid::new(1, 1, false);
        compressed.rows.push(vec![entry(u32::MAX, 'A')]);
        let err = decompress_grid(&compressed).unwrap_err();
        assert!(err.to_string().contains(&format!("Row 0 has length {} but expected 1", u32::MAX)));
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        let mut compressed = CompressedGrid::new(u32::MAX, 1, false);
        compressed.rows.push(vec![entry(u32::MAX, 'A')]);
        let err = decompress_grid(&compressed).unwrap_err();
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn runs_overflowing_the_row_together_are_rejected() {
        let mut compressed = CompressedGrid::new(4, 1, false);
        compressed.rows.push(vec![entry(3, 'A'), entry(u32::MAX, 'B')]);
        assert!(matches!(decompress_grid(&compressed), Err(CompressionError::Decompression(_))));
    }

    #[test]
    fn row_count_mismatch_is_rejected() {
        let mut compressed = CompressedGrid::new(1, 2, false);
        compressed.rows.push(vec![entry(1, 'A')]);
        let err = decompress_grid(&compressed).unwrap_err();
        assert!(err.to_string().contains("Grid has 1 rows but expected 2"));
    }
}
