use crate::adapters::pixel_format::copy_rgba_to_rgb;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

const RGB_BYTES_PER_PIXEL: usize = 3;

/// Binary (P6) PPM writer. Alpha is dropped; frames are always opaque.
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> io::Result<()> {
        let filepath = filepath.as_ref();

        if let Some(parent) = filepath.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let raster = buffer.raster();
        let mut rgb = vec![0; (buffer.buffer_size() / BYTES_PER_PIXEL) * RGB_BYTES_PER_PIXEL];
        copy_rgba_to_rgb(buffer.buffer(), &mut rgb)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;

        let mut file = BufWriter::new(fs::File::create(filepath)?);

        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", raster.width, raster.height)?;
        writeln!(file, "255")?;
        file.write_all(&rgb)?;
        file.flush()?;

        debug!(path = %filepath.display(), bytes = rgb.len(), "wrote ppm");

        Ok(())
    }

    fn file_extension(&self) -> &'static str {
        "ppm"
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;
    use crate::core::data::raster_target::RasterTarget;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "mandelbrot_explorer_{}_{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_writes_header_and_rgb_payload() {
        let dir = scratch_dir("ppm_payload");
        let path = dir.join("frame.ppm");
        let mut buffer = PixelBuffer::new(RasterTarget::new(2, 1));
        buffer
            .set_pixel(Point { x: 1, y: 0 }, Colour { r: 1, g: 2, b: 3 })
            .unwrap();

        PpmFilePresenter::new().present(&buffer, &path).unwrap();

        let bytes = fs::read(&path).unwrap();
        let header = b"P6\n2 1\n255\n";
        assert_eq!(&bytes[..header.len()], header);
        assert_eq!(&bytes[header.len()..], &[0, 0, 0, 1, 2, 3]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_creates_missing_parent_directories() {
        let dir = scratch_dir("ppm_nested");
        let path = dir.join("a").join("b").join("frame.ppm");
        let buffer = PixelBuffer::new(RasterTarget::new(3, 2));

        PpmFilePresenter::new().present(&buffer, &path).unwrap();

        assert_eq!(fs::metadata(&path).unwrap().len(), 11 + 3 * 2 * 3);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(PpmFilePresenter::default().file_extension(), "ppm");
    }
}
