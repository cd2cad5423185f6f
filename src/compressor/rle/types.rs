use serde::{Deserialize, Serialize};

use crate::converter::AsciiPixel;

/// `count` consecutive copies of `pixel`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RleEntry {
    pub count: u32,
    pub pixel: AsciiPixel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompressedGrid {
    pub width: u32,
    pub height: u32,
    pub has_color: bool,
    pub rows: Vec<Vec<RleEntry>>,
}

impl CompressedGrid {
    pub fn new(width: u32, height: u32, has_color: bool) -> Self {
        Self {
            width,
            height,
            has_color,
            rows: Vec::with_capacity(height as usize),
        }
    }
}
