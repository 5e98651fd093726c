//! Headless navigation state for the explorer.
//!
//! Owns the interactive parameters (viewport, raster size, iteration budget,
//! colour scheme) and turns user actions into fresh [`RenderConfig`]
//! snapshots for the renderer. Nothing here knows about widgets or windows.

use crate::controllers::viewport::errors::ViewportControllerError;
use crate::controllers::viewport::limits::ExplorerLimits;
use crate::core::actions::render_frame::errors::RenderError;
use crate::core::actions::render_frame::render_frame::{render_config, Frame};
use crate::core::data::complex::Complex;
use crate::core::data::raster_target::RasterTarget;
use crate::core::data::render_config::{NormalizationMode, RenderConfig};
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourScheme;
use crate::core::util::viewport_mapping::pixel_to_complex;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct ViewportController {
    config: RenderConfig,
    defaults: RenderConfig,
    limits: ExplorerLimits,
    last_rendered: Option<RenderConfig>,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(RenderConfig::default(), ExplorerLimits::default())
    }
}

impl ViewportController {
    #[must_use]
    pub fn new(defaults: RenderConfig, limits: ExplorerLimits) -> Self {
        Self {
            config: defaults,
            defaults,
            limits,
            last_rendered: None,
        }
    }

    /// The snapshot the next render will use.
    #[must_use]
    pub fn config(&self) -> RenderConfig {
        self.config
    }

    #[must_use]
    pub fn limits(&self) -> ExplorerLimits {
        self.limits
    }

    /// Magnifies by one zoom step. The center also moves left by half the
    /// visible width, as the explorer's zoom button has always done.
    pub fn zoom_in(&mut self) -> Result<(), ViewportControllerError> {
        let viewport = self.config.viewport;
        let shift = (f64::from(self.config.raster.width) / viewport.zoom()) * 0.5;
        let center = Complex::new(viewport.center().real - shift, viewport.center().imag);

        self.config.viewport = viewport
            .with_center(center)?
            .with_zoom(viewport.zoom() * self.limits.zoom_factor)?;
        debug!(zoom = self.config.viewport.zoom(), "zoomed in");

        Ok(())
    }

    /// Mirror of [`Self::zoom_in`]: shifts right by half the visible width and
    /// shrinks the zoom by one step.
    pub fn zoom_out(&mut self) -> Result<(), ViewportControllerError> {
        let viewport = self.config.viewport;
        let shift = (f64::from(self.config.raster.width) / viewport.zoom()) * 0.5;
        let center = Complex::new(viewport.center().real + shift, viewport.center().imag);

        self.config.viewport = viewport
            .with_center(center)?
            .with_zoom(viewport.zoom() / self.limits.zoom_factor)?;
        debug!(zoom = self.config.viewport.zoom(), "zoomed out");

        Ok(())
    }

    /// Recenters on the complex point under raster position `(x, y)`.
    pub fn pan_to(&mut self, x: f64, y: f64) -> Result<(), ViewportControllerError> {
        let target = pixel_to_complex(x, y, self.config.raster, self.config.viewport);

        self.config.viewport = self.config.viewport.with_center(target)?;
        debug!(real = target.real, imag = target.imag, "panned");

        Ok(())
    }

    /// Follows the display surface. Zero sizes are kept; the render that
    /// follows reports them.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.config.raster = RasterTarget::new(width, height);
        debug!(width, height, "raster resized");
    }

    /// Restores the default view, iteration budget and scheme. The raster size
    /// follows the display and is left alone.
    pub fn reset(&mut self) {
        self.config = RenderConfig {
            raster: self.config.raster,
            ..self.defaults
        };
        debug!("view reset");
    }

    /// Accepts any budget in `1..=iteration_slider_max`. Values between slider
    /// steps are kept as given.
    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), ViewportControllerError> {
        if !self.limits.accepts_iterations(max_iterations) {
            return Err(ViewportControllerError::IterationsOutOfRange {
                requested: max_iterations,
                max: self.limits.iteration_slider_max,
            });
        }

        self.config.max_iterations = max_iterations;
        Ok(())
    }

    /// Moves the budget by whole slider steps from its current value. A budget
    /// set off the step grid stays off it.
    pub fn step_iterations(&mut self, steps: i32) {
        self.config.max_iterations = self
            .limits
            .step_iterations(self.config.max_iterations, steps);
    }

    pub fn set_scheme(&mut self, scheme: ColourScheme) {
        self.config.scheme = scheme;
    }

    pub fn set_scheme_tag(&mut self, tag: &str) -> Result<(), ViewportControllerError> {
        let scheme = tag
            .parse::<ColourScheme>()
            .map_err(|err| ViewportControllerError::Render(RenderError::from(err)))?;

        self.set_scheme(scheme);
        Ok(())
    }

    pub fn set_normalization(&mut self, normalization: NormalizationMode) {
        self.config.normalization = normalization;
    }

    pub fn render(&mut self) -> Result<Frame, ViewportControllerError> {
        let frame = render_config(&self.config)?;

        info!(
            center = %self.center_label(),
            zoom = self.config.viewport.zoom(),
            max_iterations = self.config.max_iterations,
            scheme = %self.config.scheme,
            "rendered frame"
        );
        self.last_rendered = Some(self.config);

        Ok(frame)
    }

    /// Renders only when the snapshot differs from the last rendered one.
    pub fn render_if_changed(&mut self) -> Result<Option<Frame>, ViewportControllerError> {
        if self.last_rendered == Some(self.config) {
            return Ok(None);
        }

        self.render().map(Some)
    }

    /// Current center, three decimals per component.
    #[must_use]
    pub fn center_label(&self) -> String {
        let center = self.config.viewport.center();

        format!("({:.3}, {:.3})", center.real, center.imag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::viewport::Viewport;
    use crate::core::util::viewport_mapping::complex_to_pixel;

    fn small_controller() -> ViewportController {
        let defaults = RenderConfig {
            raster: RasterTarget::new(80, 60),
            max_iterations: 100,
            ..RenderConfig::default()
        };

        ViewportController::new(defaults, ExplorerLimits::default())
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {} to be close to {}",
            actual,
            expected
        );
    }

    #[test]
    fn starts_from_defaults() {
        let controller = ViewportController::default();

        assert_eq!(controller.config(), RenderConfig::default());
        assert_eq!(controller.center_label(), "(-0.500, 0.000)");
    }

    #[test]
    fn zoom_in_scales_and_shifts_left() {
        let mut controller = ViewportController::default();

        controller.zoom_in().unwrap();

        let viewport = controller.config().viewport;
        assert_close(viewport.zoom(), 300.0);
        assert_close(viewport.center().real, -2.5);
        assert_eq!(viewport.center().imag, 0.0);
    }

    #[test]
    fn zoom_out_scales_and_shifts_right() {
        let mut controller = ViewportController::default();

        controller.zoom_out().unwrap();

        let viewport = controller.config().viewport;
        assert_close(viewport.zoom(), 200.0 / 1.5);
        assert_close(viewport.center().real, 1.5);
    }

    #[test]
    fn pan_centers_the_clicked_point() {
        let mut controller = ViewportController::default();
        let before = controller.config();
        let clicked = pixel_to_complex(650.0, 120.0, before.raster, before.viewport);

        controller.pan_to(650.0, 120.0).unwrap();

        let after = controller.config();
        assert_eq!(after.viewport.center(), clicked);
        assert_eq!(after.viewport.zoom(), before.viewport.zoom());

        let (px, py) = complex_to_pixel(clicked, after.raster, after.viewport);
        assert_close(px, 400.0);
        assert_close(py, 300.0);
    }

    #[test]
    fn resize_keeps_viewport() {
        let mut controller = ViewportController::default();

        controller.resize(1024, 768);

        assert_eq!(controller.config().raster, RasterTarget::new(1024, 768));
        assert_eq!(controller.config().viewport, Viewport::default());
    }

    #[test]
    fn reset_restores_defaults_but_keeps_raster() {
        let mut controller = ViewportController::default();
        controller.resize(300, 200);
        controller.zoom_in().unwrap();
        controller.pan_to(10.0, 10.0).unwrap();
        controller.set_max_iterations(1500).unwrap();
        controller.set_scheme(ColourScheme::Ocean);

        controller.reset();

        let config = controller.config();
        assert_eq!(config.viewport, Viewport::default());
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.scheme, ColourScheme::Grayscale);
        assert_eq!(config.raster, RasterTarget::new(300, 200));
    }

    #[test]
    fn iteration_budget_must_stay_on_slider() {
        let mut controller = ViewportController::default();

        assert_eq!(
            controller.set_max_iterations(0),
            Err(ViewportControllerError::IterationsOutOfRange {
                requested: 0,
                max: 2000
            })
        );
        assert!(controller.set_max_iterations(2100).is_err());
        assert_eq!(controller.config().max_iterations, 1000);

        controller.step_iterations(2);
        assert_eq!(controller.config().max_iterations, 1200);
    }

    #[test]
    fn off_grid_budget_steps_from_where_it_is() {
        let mut controller = ViewportController::default();
        controller.set_max_iterations(50).unwrap();

        controller.step_iterations(-1);
        assert_eq!(controller.config().max_iterations, 1);

        controller.set_max_iterations(1250).unwrap();
        controller.step_iterations(1);
        assert_eq!(controller.config().max_iterations, 1350);
    }

    #[test]
    fn stepping_with_short_slider_stays_on_it() {
        let limits = ExplorerLimits {
            zoom_factor: 1.5,
            iteration_slider_max: 50,
            iteration_slider_step: 100,
        };
        let defaults = RenderConfig {
            max_iterations: 40,
            ..RenderConfig::default()
        };
        let mut controller = ViewportController::new(defaults, limits);

        controller.step_iterations(1);

        assert_eq!(controller.config().max_iterations, 50);
    }

    #[test]
    fn unknown_scheme_tag_is_surfaced() {
        let mut controller = ViewportController::default();

        let result = controller.set_scheme_tag("infrared");

        assert_eq!(
            result,
            Err(ViewportControllerError::Render(RenderError::InvalidScheme {
                tag: "infrared".to_owned()
            }))
        );
        assert_eq!(controller.config().scheme, ColourScheme::Grayscale);

        controller.set_scheme_tag("rainbow").unwrap();
        assert_eq!(controller.config().scheme, ColourScheme::Rainbow);
    }

    #[test]
    fn render_skips_unchanged_snapshots() {
        let mut controller = small_controller();

        assert!(controller.render_if_changed().unwrap().is_some());
        assert!(controller.render_if_changed().unwrap().is_none());

        controller.set_normalization(NormalizationMode::TwoPass);
        assert!(controller.render_if_changed().unwrap().is_some());
        assert!(controller.render_if_changed().unwrap().is_none());
    }

    #[test]
    fn render_reports_empty_raster() {
        let mut controller = small_controller();
        controller.resize(0, 60);

        assert_eq!(
            controller.render(),
            Err(ViewportControllerError::Render(RenderError::InvalidRaster {
                width: 0,
                height: 60
            }))
        );
        assert!(controller.render_if_changed().is_err());
    }

    #[test]
    fn rendered_frame_matches_snapshot_size() {
        let mut controller = small_controller();

        let frame = controller.render().unwrap();

        assert_eq!(frame.pixel_buffer.raster(), RasterTarget::new(80, 60));
        assert_eq!(frame.pixel_buffer.buffer_size(), 80 * 60 * 4);
    }
}
