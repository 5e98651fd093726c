//! Pixel format conversion helpers for presentation adapters.

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelFormatError {
    RaggedSource { src_len: usize },
    DestinationMismatch { expected: usize, actual: usize },
}

impl fmt::Display for PixelFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RaggedSource { src_len } => {
                write!(f, "src length {} is not a multiple of 4", src_len)
            }
            Self::DestinationMismatch { expected, actual } => {
                write!(
                    f,
                    "dst length {} does not match expected {}",
                    actual, expected
                )
            }
        }
    }
}

impl Error for PixelFormatError {}

/// Copies RGBA pixel data to packed RGB, dropping the alpha channel.
///
/// `dst` must hold exactly three bytes for every four in `src`.
pub fn copy_rgba_to_rgb(src: &[u8], dst: &mut [u8]) -> Result<(), PixelFormatError> {
    if src.len() % 4 != 0 {
        return Err(PixelFormatError::RaggedSource { src_len: src.len() });
    }

    let expected = (src.len() / 4) * 3;
    if dst.len() != expected {
        return Err(PixelFormatError::DestinationMismatch {
            expected,
            actual: dst.len(),
        });
    }

    for (src_pixel, dst_pixel) in src.chunks_exact(4).zip(dst.chunks_exact_mut(3)) {
        dst_pixel.copy_from_slice(&src_pixel[..3]);
    }

    Ok(())
}
