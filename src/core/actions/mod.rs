pub mod cancellation;
pub mod evaluate_escape_times;
pub mod render_frame;
