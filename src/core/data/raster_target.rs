use crate::core::data::point::Point;

pub const DEFAULT_RASTER_WIDTH: u32 = 800;
pub const DEFAULT_RASTER_HEIGHT: u32 = 600;

/// Pixel dimensions of the surface a frame is rendered into.
///
/// Zero-sized targets can be constructed (a window mid-layout reports them);
/// the renderer is the one that refuses them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RasterTarget {
    pub width: u32,
    pub height: u32,
}

impl RasterTarget {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as i64) < self.width as i64
            && (point.y as i64) < self.height as i64
    }

    /// Whether every pixel position is addressable as a [`Point`].
    #[must_use]
    pub fn fits_point_grid(&self) -> bool {
        i32::try_from(self.width).is_ok() && i32::try_from(self.height).is_ok()
    }

    /// Row-major pixel positions, top row first. Rasters that don't
    /// [fit the point grid](Self::fits_point_grid) are cut at `i32::MAX`.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let width = i32::try_from(self.width).unwrap_or(i32::MAX);
        let height = i32::try_from(self.height).unwrap_or(i32::MAX);

        (0..height).flat_map(move |y| (0..width).map(move |x| Point { x, y }))
    }
}

impl Default for RasterTarget {
    fn default() -> Self {
        Self::new(DEFAULT_RASTER_WIDTH, DEFAULT_RASTER_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty() {
        assert!(RasterTarget::new(0, 10).is_empty());
        assert!(RasterTarget::new(10, 0).is_empty());
        assert!(!RasterTarget::new(1, 1).is_empty());
    }

    #[test]
    fn test_pixel_count() {
        assert_eq!(RasterTarget::new(800, 600).pixel_count(), 480_000);
        assert_eq!(RasterTarget::new(0, 600).pixel_count(), 0);
    }

    #[test]
    fn test_contains_point() {
        let raster = RasterTarget::new(4, 3);

        assert!(raster.contains_point(Point { x: 0, y: 0 }));
        assert!(raster.contains_point(Point { x: 3, y: 2 }));
        assert!(!raster.contains_point(Point { x: 4, y: 0 }));
        assert!(!raster.contains_point(Point { x: 0, y: 3 }));
        assert!(!raster.contains_point(Point { x: -1, y: 1 }));
    }

    #[test]
    fn test_points_are_row_major() {
        let points: Vec<Point> = RasterTarget::new(3, 2).points().collect();

        assert_eq!(
            points,
            vec![
                Point { x: 0, y: 0 },
                Point { x: 1, y: 0 },
                Point { x: 2, y: 0 },
                Point { x: 0, y: 1 },
                Point { x: 1, y: 1 },
                Point { x: 2, y: 1 },
            ]
        );
    }

    #[test]
    fn test_fits_point_grid() {
        assert!(RasterTarget::new(800, 600).fits_point_grid());
        assert!(RasterTarget::new(i32::MAX as u32, 1).fits_point_grid());
        assert!(!RasterTarget::new(i32::MAX as u32 + 1, 1).fits_point_grid());
        assert!(!RasterTarget::new(1, u32::MAX).fits_point_grid());
    }

    #[test]
    fn test_points_empty_for_zero_sized_raster() {
        assert_eq!(RasterTarget::new(0, 5).points().count(), 0);
    }
}
