pub mod factory;
pub mod hsl;
pub mod kinds;
pub mod maps;
