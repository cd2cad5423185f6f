mod types;
mod compress;
mod decompress;

pub use types::{CompressedGrid, RleEntry};
pub use compress::compress_grid;
pub use decompress::decompress_grid;
