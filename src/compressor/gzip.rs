use std::io::Read;

use flate2::{read::{GzDecoder, GzEncoder}, Compression};

use super::{rle::CompressedGrid, CompressionError};

pub fn compress(data: &[u8]) -> Result<Vec<u8>, CompressionError> {
    let mut encoder = GzEncoder::new(data, Compression::default());
    let mut compressed = Vec::new();
    encoder.read_to_end(&mut compressed)?;
    Ok(compressed)
}

pub fn decompress(compressed: &[u8]) -> Result<Vec<u8>, CompressionError> {
    let mut decoder = GzDecoder::new(compressed);
    let mut decompressed = Vec::new();
    decoder.read_to_end(&mut decompressed)?;
    Ok(decompressed)
}

pub fn serialize_grid(grid: &CompressedGrid) -> Result<Vec<u8>, CompressionError> {
    Ok(serde_json::to_vec(grid)?)
}

pub fn deserialize_grid(data: &[u8]) -> Result<CompressedGrid, CompressionError> {
    Ok(serde_json::from_slice(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_compression() {
        let data = b"Hello, world!";
        let compressed = compress(data).unwrap();
        assert_eq!(&compressed[..2], &[0x1f, 0x8b]);
        assert_eq!(decompress(&compressed).unwrap(), data);
    }

    #[test]
    fn empty_data() {
        let compressed = compress(b"").unwrap();
        assert!(decompress(&compressed).unwrap().is_empty());
    }

    #[test]
    fn grid_json_shape() {
        let grid = CompressedGrid::new(0, 0, false);
        let json: serde_json::Value = serde_json::from_slice(&serialize_grid(&grid).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({"width": 0, "height": 0, "has_color": false, "rows": []}));
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        assert!(matches!(deserialize_grid(b"{"), Err(CompressionError::Serialization(_))));
    }
}
