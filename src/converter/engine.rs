use image::{imageops::FilterType, GenericImageView, Rgb};
use tracing::debug;

use super::{
    config::MAX_OUTPUT_HEIGHT, AsciiGrid, AsciiPixel, ConverterConfig, ConverterError,
};

/// Image to ASCII conversion.
pub struct Converter;

impl Converter {
    fn adjust(value: f32, brightness: f32, contrast: f32) -> u8 {
        (((value * brightness - 128.0) * contrast) + 128.0).clamp(0.0, 255.0) as u8
    }

    /// Brightness is applied first, then contrast.
    fn adjust_color(rgb: &Rgb<u8>, brightness: f32, contrast: f32) -> [u8; 3] {
        [
            Self::adjust(rgb[0] as f32, brightness, contrast),
            Self::adjust(rgb[1] as f32, brightness, contrast),
            Self::adjust(rgb[2] as f32, brightness, contrast),
        ]
    }

    fn luminance(rgb: [u8; 3]) -> u8 {
        (0.299 * rgb[0] as f32 + 0.587 * rgb[1] as f32 + 0.114 * rgb[2] as f32) as u8
    }

    /// Maps an intensity (0-255) onto the character set. `chars` must not be empty.
    fn intensity_to_char(intensity: u8, chars: &[char]) -> char {
        let index = (intensity as usize * (chars.len() - 1)) / 255;
        chars[index]
    }

    fn build_ascii_grid<F>(
        output_width: u32,
        output_height: u32,
        character_set: &[char],
        mut get_pixel: F,
    ) -> AsciiGrid
    where
        F: FnMut(u32, u32) -> (u8, Option<[u8; 3]>),
    {
        (0..output_height)
            .map(|y| {
                (0..output_width)
                    .map(|x| {
                        let (intensity, color) = get_pixel(x, y);
                        AsciiPixel {
                            character: Self::intensity_to_char(intensity, character_set),
                            color,
                        }
                    })
                    .collect()
            })
            .collect()
    }

    fn output_height(config: &ConverterConfig, width: u32, height: u32) -> Result<u32, ConverterError> {
        let output_height = match config.output_height {
            Some(output_height) => output_height,
            None => {
                let derived = config.output_width as f32 * height as f32 / width as f32
                    * config.aspect_ratio_correction;
                derived as u32
            }
        };

        if output_height == 0 {
            return Err(ConverterError::InvalidParameter("Calculated output height is 0".into()));
        }
        if output_height > MAX_OUTPUT_HEIGHT {
            return Err(ConverterError::InvalidParameter(format!(
                "Calculated output height {} exceeds {}",
                output_height, MAX_OUTPUT_HEIGHT
            )));
        }
        Ok(output_height)
    }

    /// Decodes `image_bytes` and renders it as a grid of `config.output_width` columns.
    pub fn convert_from_bytes(
        image_bytes: &[u8],
        config: &ConverterConfig,
    ) -> Result<AsciiGrid, ConverterError> {
        config.validate()?;

        let img = image::load_from_memory(image_bytes)?;
        let (width, height) = img.dimensions();
        let output_height = Self::output_height(config, width, height)?;
        debug!(
            "Converting {}x{} image to {}x{} characters (color: {})",
            width, height, config.output_width, output_height, config.is_color
        );

        let (brightness, contrast) = (config.brightness_factor, config.contrast_factor);
        let grid = if config.is_color {
            let img_rgb = image::imageops::resize(
                &img.to_rgb8(),
                config.output_width,
                output_height,
                FilterType::Lanczos3,
            );
            Self::build_ascii_grid(config.output_width, output_height, &config.character_set, |x, y| {
                let rgb = Self::adjust_color(img_rgb.get_pixel(x, y), brightness, contrast);
                (Self::luminance(rgb), Some(rgb))
            })
        } else {
            let img_gray = image::imageops::resize(
                &img.to_luma8(),
                config.output_width,
                output_height,
                FilterType::Nearest,
            );
            Self::build_ascii_grid(config.output_width, output_height, &config.character_set, |x, y| {
                let luma = img_gray.get_pixel(x, y)[0];
                (Self::adjust(luma as f32, brightness, contrast), None)
            })
        };

        Ok(grid)
    }
}
