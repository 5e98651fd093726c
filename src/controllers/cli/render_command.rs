use crate::controllers::cli::args::CliArgs;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_frame::render_frame::{Frame, render_config};
use crate::core::data::render_config::RenderConfig;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Renders one frame from command-line arguments and hands it to a presenter.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    frame: Option<Frame>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            frame: None,
        }
    }

    #[must_use]
    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    pub fn generate(&mut self, config: &RenderConfig) -> Result<(), Box<dyn std::error::Error>> {
        info!(
            width = config.raster.width,
            height = config.raster.height,
            max_iterations = config.max_iterations,
            scheme = %config.scheme,
            normalization = %config.normalization,
            "rendering mandelbrot set"
        );

        let start = Instant::now();
        let frame = render_config(config)?;

        info!(
            elapsed = ?start.elapsed(),
            min_iterations = frame.stats.min_iterations,
            max_iterations = frame.stats.max_iterations,
            "frame ready"
        );

        self.frame = Some(frame);

        Ok(())
    }

    /// Writes the last generated frame. Does nothing before the first
    /// successful [`Self::generate`].
    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(frame) = &self.frame {
            let filepath = self.with_default_extension(filepath.as_ref());

            self.presenter.present(&frame.pixel_buffer, &filepath)?;
            info!(path = %filepath.display(), "image written");
        }

        Ok(())
    }

    pub fn run(&mut self, args: &CliArgs) -> Result<(), Box<dyn std::error::Error>> {
        let config = args.render_config()?;

        self.generate(&config)?;
        self.write(&args.output)?;

        Ok(())
    }

    fn with_default_extension(&self, filepath: &Path) -> PathBuf {
        if filepath.extension().is_some() {
            filepath.to_path_buf()
        } else {
            filepath.with_extension(self.presenter.file_extension())
        }
    }
}
