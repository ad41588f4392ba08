mod composer;
mod error;
mod exporter;
pub mod raster;

pub use composer::*;
pub use error::*;
pub use exporter::*;
