use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes a finished frame somewhere on disk.
pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;

    /// Extension used when the caller names a file without one.
    fn file_extension(&self) -> &'static str;
}
