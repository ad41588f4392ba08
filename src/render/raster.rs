use image::{imageops, imageops::FilterType, Rgba, RgbaImage};
use resvg::tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Rect, Transform};

use super::RenderError;
use crate::models::{Bounds, Point, Shape, ShapeDescriptor};

/// Bezier handle length for a quarter circle of radius 1
const KAPPA: f32 = 0.552_284_8;

/// Square drawing surface in premultiplied RGBA.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    pub fn new(size: u32) -> Result<Self, RenderError> {
        let pixmap = Pixmap::new(size, size).ok_or(RenderError::CanvasAllocation { size })?;
        Ok(Self { pixmap })
    }

    pub fn size(&self) -> u32 {
        self.pixmap.width()
    }

    /// Fill one shape over whatever is already on the canvas.
    pub fn fill(&mut self, descriptor: &ShapeDescriptor) -> Result<(), RenderError> {
        let path = match &descriptor.shape {
            Shape::Ellipse { bounds } => ellipse_path(bounds),
            Shape::RoundedRect { bounds, radius } => rounded_rect_path(bounds, *radius),
            Shape::Polygon { points } => polygon_path(points),
        }
        .ok_or(RenderError::DegenerateShape {
            kind: shape_kind(&descriptor.shape),
        })?;

        let [r, g, b] = descriptor.fill.channels();
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, 255);
        paint.anti_alias = true;

        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        Ok(())
    }

    /// Hand over the raw pixels, still premultiplied.
    pub fn into_premultiplied(self) -> Result<RgbaImage, RenderError> {
        let size = self.size();
        RgbaImage::from_raw(size, size, self.pixmap.take())
            .ok_or(RenderError::CanvasAllocation { size })
    }
}

fn shape_kind(shape: &Shape) -> &'static str {
    match shape {
        Shape::Ellipse { .. } => "ellipse",
        Shape::RoundedRect { .. } => "rounded rectangle",
        Shape::Polygon { .. } => "polygon",
    }
}

fn to_rect(bounds: &Bounds) -> Option<Rect> {
    Rect::from_ltrb(bounds.left, bounds.top, bounds.right, bounds.bottom)
}

fn ellipse_path(bounds: &Bounds) -> Option<Path> {
    PathBuilder::from_oval(to_rect(bounds)?)
}

fn rounded_rect_path(bounds: &Bounds, radius: f32) -> Option<Path> {
    let r = radius
        .min(bounds.width() / 2.0)
        .min(bounds.height() / 2.0)
        .max(0.0);
    if r == 0.0 {
        return Some(PathBuilder::from_rect(to_rect(bounds)?));
    }

    let Bounds {
        left: l,
        top: t,
        right: rt,
        bottom: b,
    } = *bounds;
    let k = r * (1.0 - KAPPA);

    let mut pb = PathBuilder::new();
    pb.move_to(l + r, t);
    pb.line_to(rt - r, t);
    pb.cubic_to(rt - k, t, rt, t + k, rt, t + r);
    pb.line_to(rt, b - r);
    pb.cubic_to(rt, b - k, rt - k, b, rt - r, b);
    pb.line_to(l + r, b);
    pb.cubic_to(l + k, b, l, b - k, l, b - r);
    pb.line_to(l, t + r);
    pb.cubic_to(l, t + k, l + k, t, l + r, t);
    pb.close();
    pb.finish()
}

fn polygon_path(points: &[Point]) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for p in rest {
        pb.line_to(p.x, p.y);
    }
    pb.close();
    pb.finish()
}

/// Lanczos3 resize of a premultiplied image, returned straight (non-premultiplied).
///
/// Filtering premultiplied pixels keeps the transparent surround from bleeding
/// black into antialiased edges.
pub fn downscale(premultiplied: &RgbaImage, size: u32) -> RgbaImage {
    let mut resized = imageops::resize(premultiplied, size, size, FilterType::Lanczos3);
    for pixel in resized.pixels_mut() {
        *pixel = demultiply(*pixel);
    }
    resized
}

fn demultiply(Rgba([r, g, b, a]): Rgba<u8>) -> Rgba<u8> {
    if a == 0 {
        return Rgba([0, 0, 0, 0]);
    }
    let alpha = u32::from(a);
    // Lanczos overshoot can leave a channel above alpha
    let straight = |c: u8| ((u32::from(c) * 255 + alpha / 2) / alpha).min(255) as u8;
    Rgba([straight(r), straight(g), straight(b), a])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rgb;

    fn pixel(image: &RgbaImage, x: u32, y: u32) -> [u8; 4] {
        image.get_pixel(x, y).0
    }

    #[test]
    fn test_new_canvas_is_transparent() {
        let canvas = Canvas::new(8).unwrap();
        let image = canvas.into_premultiplied().unwrap();
        assert_eq!(image.dimensions(), (8, 8));
        assert!(image.pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn test_zero_canvas_fails() {
        assert!(matches!(
            Canvas::new(0),
            Err(RenderError::CanvasAllocation { size: 0 })
        ));
    }

    #[test]
    fn test_fill_rounded_rect_leaves_corners_clear() {
        let mut canvas = Canvas::new(64).unwrap();
        canvas
            .fill(&ShapeDescriptor {
                shape: Shape::RoundedRect {
                    bounds: Bounds::new(0.0, 0.0, 64.0, 64.0),
                    radius: 16.0,
                },
                fill: Rgb(255, 0, 0),
            })
            .unwrap();
        let image = canvas.into_premultiplied().unwrap();

        assert_eq!(pixel(&image, 32, 32), [255, 0, 0, 255]);
        assert_eq!(pixel(&image, 0, 0)[3], 0);
        assert_eq!(pixel(&image, 32, 0), [255, 0, 0, 255]);
    }

    #[test]
    fn test_fill_polygon() {
        let mut canvas = Canvas::new(32).unwrap();
        canvas
            .fill(&ShapeDescriptor {
                shape: Shape::Polygon {
                    points: vec![
                        Point::new(0.0, 0.0),
                        Point::new(32.0, 0.0),
                        Point::new(16.0, 32.0),
                    ],
                },
                fill: Rgb(0, 0, 255),
            })
            .unwrap();
        let image = canvas.into_premultiplied().unwrap();

        assert_eq!(pixel(&image, 16, 4), [0, 0, 255, 255]);
        assert_eq!(pixel(&image, 1, 30)[3], 0);
        assert_eq!(pixel(&image, 30, 30)[3], 0);
    }

    #[test]
    fn test_later_fill_covers_earlier() {
        let mut canvas = Canvas::new(16).unwrap();
        for fill in [Rgb(255, 0, 0), Rgb(0, 255, 0)] {
            canvas
                .fill(&ShapeDescriptor {
                    shape: Shape::Ellipse {
                        bounds: Bounds::new(0.0, 0.0, 16.0, 16.0),
                    },
                    fill,
                })
                .unwrap();
        }
        let image = canvas.into_premultiplied().unwrap();
        assert_eq!(pixel(&image, 8, 8), [0, 255, 0, 255]);
    }

    #[test]
    fn test_empty_polygon_is_degenerate() {
        let mut canvas = Canvas::new(4).unwrap();
        let result = canvas.fill(&ShapeDescriptor {
            shape: Shape::Polygon { points: vec![] },
            fill: Rgb(0, 0, 0),
        });
        assert!(matches!(
            result,
            Err(RenderError::DegenerateShape { kind: "polygon" })
        ));
    }

    #[test]
    fn test_demultiply() {
        assert_eq!(demultiply(Rgba([0, 0, 0, 0])), Rgba([0, 0, 0, 0]));
        assert_eq!(demultiply(Rgba([10, 20, 30, 255])), Rgba([10, 20, 30, 255]));
        assert_eq!(demultiply(Rgba([64, 0, 128, 128])), Rgba([128, 0, 255, 128]));
        assert_eq!(demultiply(Rgba([200, 0, 0, 100])), Rgba([255, 0, 0, 100]));
    }

    #[test]
    fn test_downscale_keeps_solid_color() {
        let solid = RgbaImage::from_pixel(64, 64, Rgba([40, 80, 120, 255]));
        let small = downscale(&solid, 8);
        assert_eq!(small.dimensions(), (8, 8));
        assert!(small.pixels().all(|p| p.0 == [40, 80, 120, 255]));
    }
}
