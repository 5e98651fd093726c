use clap::Parser;
use mandelbrot_explorer::{CliArgs, CliRenderController, PpmFilePresenter};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = CliArgs::parse();
    let mut controller = CliRenderController::new(PpmFilePresenter::new());

    controller.run(&args)
}
