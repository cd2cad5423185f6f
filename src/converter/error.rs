use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConverterError {
    /// The uploaded bytes could not be decoded as an image.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
