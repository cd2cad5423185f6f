use crate::compressor::CompressionError;
use crate::converter::AsciiPixel;

use super::{CompressedGrid, RleEntry};

/// Run-length encodes each row of a rectangular grid.
pub fn compress_grid(grid: &[Vec<AsciiPixel>]) -> Result<CompressedGrid, CompressionError> {
    let Some(first_row) = grid.first() else {
        return Ok(CompressedGrid::new(0, 0, false));
    };

    let width = first_row.len();
    if let Some(index) = grid.iter().position(|row| row.len() != width) {
        return Err(CompressionError::InvalidGrid(format!(
            "Row {} has length {} but expected {}",
            index, grid[index].len(), width
        )));
    }

    let has_color = grid.iter().flatten().any(|pixel| pixel.color.is_some());
    let mut compressed = CompressedGrid::new(width as u32, grid.len() as u32, has_color);
    compressed.rows.extend(grid.iter().map(|row| compress_row(row)));

    Ok(compressed)
}

/// A run ends when either the character or the colour changes.
fn compress_row(row: &[AsciiPixel]) -> Vec<RleEntry> {
    let mut entries: Vec<RleEntry> = Vec::new();

    for pixel in row {
        match entries.last_mut() {
            Some(entry) if entry.pixel == *pixel => entry.count += 1,
            _ => entries.push(RleEntry { count: 1, pixel: pixel.clone() }),
        }
    }

    entries
}
