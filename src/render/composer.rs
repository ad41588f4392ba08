use image::RgbaImage;

use super::raster::{self, Canvas};
use super::RenderError;
use crate::models::{IconLayout, RENDER_SIZE};

/// Icon composer
/// Paints the full layout in canonical space, then resamples to the requested size
pub struct IconComposer;

impl IconComposer {
    /// Render the icon as a `size` × `size` straight-alpha RGBA image.
    pub fn compose(size: u32) -> Result<RgbaImage, RenderError> {
        if size == 0 {
            return Err(RenderError::InvalidSize(size));
        }
        if size > RENDER_SIZE {
            log::warn!(
                "Upscaling icon from {} to {}, expect soft edges",
                RENDER_SIZE,
                size
            );
        }

        let composed = Self::compose_canonical()?;
        log::debug!("Resampling {}px canvas to {}px", RENDER_SIZE, size);
        Ok(raster::downscale(&composed, size))
    }

    /// Paint every shape at `RENDER_SIZE`, premultiplied and unscaled.
    pub fn compose_canonical() -> Result<RgbaImage, RenderError> {
        let layout = IconLayout::canonical();
        let mut canvas = Canvas::new(RENDER_SIZE)?;

        let shapes = layout.paint_order();
        for shape in &shapes {
            canvas.fill(shape)?;
        }
        log::debug!("Painted {} shapes at {}px", shapes.len(), RENDER_SIZE);

        canvas.into_premultiplied()
    }
}
