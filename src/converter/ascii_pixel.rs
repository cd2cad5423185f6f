use serde::{Deserialize, Serialize};

/// A single output character with an optional colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsciiPixel {
    pub character: char,

    /// `None` for grayscale output
    pub color: Option<[u8; 3]>,
}

impl AsciiPixel {
    pub fn plain(character: char) -> Self {
        Self { character, color: None }
    }

    pub fn colored(character: char, color: [u8; 3]) -> Self {
        Self { character, color: Some(color) }
    }
}
