// Library entry point for the icon generator
pub mod models;
pub mod render;
pub mod utils;
