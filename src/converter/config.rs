use serde::{Deserialize, Serialize};

use super::ConverterError;

/// Dark to light.
pub const DEFAULT_CHARS: &[char] = &[
    ' ', '.', ':', ',', '-', '=', '+', '*', '@', '#',
    '%', '&', 'o', '0', 'O', '8', 'B', '#', '▒', '█',
];

pub const DEFAULT_OUTPUT_WIDTH: u32 = 100;
pub const MAX_OUTPUT_WIDTH: u32 = 1000;
pub const MAX_OUTPUT_HEIGHT: u32 = 1000;

/// Terminal cells are roughly twice as tall as they are wide.
pub const DEFAULT_ASPECT_RATIO_CORRECTION: f32 = 0.55;

/// Options for a single image conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    pub character_set: Vec<char>,
    pub output_width: u32,

    /// Derived from the image aspect ratio when `None`.
    pub output_height: Option<u32>,
    pub brightness_factor: f32,
    pub contrast_factor: f32,
    pub is_color: bool,
    pub aspect_ratio_correction: f32,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            character_set: DEFAULT_CHARS.to_vec(),
            output_width: DEFAULT_OUTPUT_WIDTH,
            output_height: None,
            brightness_factor: 1.0,
            contrast_factor: 1.0,
            is_color: false,
            aspect_ratio_correction: DEFAULT_ASPECT_RATIO_CORRECTION,
        }
    }
}

impl ConverterConfig {
    pub fn validate(&self) -> Result<(), ConverterError> {
        if self.character_set.is_empty() {
            return Err(invalid("Character set must not be empty"));
        }
        if self.output_width == 0 {
            return Err(invalid("Output width must be greater than 0"));
        }
        if self.output_width > MAX_OUTPUT_WIDTH {
            return Err(invalid(format!("Output width must be at most {}", MAX_OUTPUT_WIDTH)));
        }
        match self.output_height {
            Some(0) => return Err(invalid("Output height must be greater than 0")),
            Some(height) if height > MAX_OUTPUT_HEIGHT => {
                return Err(invalid(format!("Output height must be at most {}", MAX_OUTPUT_HEIGHT)))
            }
            _ => {}
        }
        if !(self.brightness_factor > 0.0) {
            return Err(invalid("Brightness factor must be positive"));
        }
        if !(self.contrast_factor > 0.0) {
            return Err(invalid("Contrast factor must be positive"));
        }
        if !(self.aspect_ratio_correction > 0.0) {
            return Err(invalid("Aspect ratio correction must be positive"));
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> ConverterError {
    ConverterError::InvalidParameter(message.into())
}
