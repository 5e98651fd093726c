pub mod colour;
pub mod complex;
pub mod frame_stats;
pub mod pixel_buffer;
pub mod point;
pub mod raster_target;
pub mod render_config;
pub mod viewport;
