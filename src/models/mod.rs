mod palette;
mod shapes;

pub use palette::*;
pub use shapes::*;
