//! Wire compression for converted grids: run-length encoding per row,
//! serialised to JSON and then gzipped.

pub mod rle;
pub mod gzip;

use thiserror::Error;

use crate::converter::{AsciiGrid, AsciiPixel};

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    #[error("Decompression error: {0}")]
    Decompression(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Gzip error: {0}")]
    Io(#[from] std::io::Error),
}

/// RLE, then JSON, then gzip.
pub fn compress_ascii_grid(grid: &[Vec<AsciiPixel>]) -> Result<Vec<u8>, CompressionError> {
    let rle_compressed = rle::compress_grid(grid)?;
    let serialized = gzip::serialize_grid(&rle_compressed)?;
    gzip::compress(&serialized)
}

pub fn decompress_ascii_grid(data: &[u8]) -> Result<AsciiGrid, CompressionError> {
    let serialized = gzip::decompress(data)?;
    let rle_compressed = gzip::deserialize_grid(&serialized)?;
    rle::decompress_grid(&rle_compressed)
}
