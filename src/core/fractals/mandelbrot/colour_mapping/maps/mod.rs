pub mod grayscale;
pub mod ocean;
pub mod rainbow;
pub mod sunset;
