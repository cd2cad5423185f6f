pub mod ascii_pixel;
pub mod config;
pub mod error;
pub mod engine;

pub use ascii_pixel::AsciiPixel;
pub use config::ConverterConfig;
pub use error::ConverterError;
pub use engine::Converter;

/// A converted image, one `Vec` per output row.
pub type AsciiGrid = Vec<Vec<AsciiPixel>>;
