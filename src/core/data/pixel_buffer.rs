use crate::core::data::colour::{Colour, OPAQUE_ALPHA};
use crate::core::data::point::Point;
use crate::core::data::raster_target::RasterTarget;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 4;

fn raster_to_buffer_size(raster: RasterTarget) -> usize {
    raster.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        raster: RasterTarget,
    },
    BoundsMismatch {
        raster_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                raster_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "raster size {} does not match buffer size {}",
                    raster_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, raster } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} raster",
                    pixel.x, pixel.y, raster.width, raster.height
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA bytes for one frame. Alpha is always opaque.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    raster: RasterTarget,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    /// A black, fully opaque buffer.
    #[must_use]
    pub fn new(raster: RasterTarget) -> Self {
        let mut buffer = vec![0; raster_to_buffer_size(raster)];

        for pixel in buffer.chunks_exact_mut(BYTES_PER_PIXEL) {
            pixel[3] = OPAQUE_ALPHA;
        }

        Self { raster, buffer }
    }

    pub fn from_data(raster: RasterTarget, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let raster_size = raster_to_buffer_size(raster);

        if raster_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                raster_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { raster, buffer })
    }

    #[must_use]
    pub fn raster(&self) -> RasterTarget {
        self.raster
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn into_data(self) -> PixelBufferData {
        self.buffer
    }

    /// Mutable 4-byte RGBA chunks, one per pixel in row-major order.
    pub fn pixels_mut(&mut self) -> std::slice::ChunksExactMut<'_, u8> {
        self.buffer.chunks_exact_mut(BYTES_PER_PIXEL)
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.raster.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                raster: self.raster,
            });
        }

        Ok((pixel.y as usize * self.raster.width as usize + pixel.x as usize) * BYTES_PER_PIXEL)
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel)?;

        self.buffer[index..index + BYTES_PER_PIXEL].copy_from_slice(&colour.to_rgba());

        Ok(())
    }

    pub fn pixel(&self, pixel: Point) -> Result<[u8; 4], PixelBufferError> {
        let index = self.index_of(pixel)?;
        let bytes = &self.buffer[index..index + BYTES_PER_PIXEL];

        Ok([bytes[0], bytes[1], bytes[2], bytes[3]])
    }
}
