pub mod evaluate_escape_times;
pub mod evaluate_escape_times_rayon;
pub mod ports;
