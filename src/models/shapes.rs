use super::palette::{self, Rgb};

/// Edge length of the canonical render space every shape is composed in.
pub const RENDER_SIZE: u32 = 512;

/// Background disk inset from each canvas edge.
pub const DISK_MARGIN_RATIO: f64 = 0.0625;

const STICK_WIDTH_RATIO: f64 = 0.0625;
const STICK_TOP_RATIO: f64 = 0.109;
const STICK_BOTTOM_RATIO: f64 = 0.891;

const TIP_TOP_RATIO: f64 = 0.844;
const TIP_APEX_RATIO: f64 = 0.953;

const CHUNK_RADIUS_RATIO: f64 = 0.039;
const NOTCH_WIDTH_RATIO: f64 = 0.109;
const NOTCH_HEIGHT_RATIO: f64 = 0.047;
const NOTCH_OFFSET_RATIO: f64 = 0.031;
const NOTCH_RADIUS_RATIO: f64 = 0.016;
const NOTCH_MIN_RADIUS: f32 = 2.0;

const KNOB_CENTER_RATIO: f64 = 0.109;
const KNOB_OUTER_RATIO: f64 = 0.047;
const KNOB_INNER_RATIO: f64 = 0.023;

/// One food piece threaded on the skewer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabChunkSpec {
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
    pub body: Rgb,
    pub notch: Rgb,
}

/// Tab chunks from top to bottom. Order is paint order.
pub const TAB_CHUNKS: [TabChunkSpec; 4] = [
    TabChunkSpec {
        center_y: 0.234,
        width: 0.344,
        height: 0.156,
        body: palette::RED,
        notch: palette::RED_NOTCH,
    },
    TabChunkSpec {
        center_y: 0.422,
        width: 0.344,
        height: 0.156,
        body: palette::AMBER,
        notch: palette::AMBER_NOTCH,
    },
    TabChunkSpec {
        center_y: 0.609,
        width: 0.344,
        height: 0.156,
        body: palette::GREEN,
        notch: palette::GREEN_NOTCH,
    },
    TabChunkSpec {
        center_y: 0.781,
        width: 0.281,
        height: 0.125,
        body: palette::PURPLE,
        notch: palette::PURPLE_NOTCH,
    },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box in canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Square box around a circle
    pub fn around(center: Point, radius: f32) -> Self {
        Self::new(
            center.x - radius,
            center.y - radius,
            center.x + radius,
            center.y + radius,
        )
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    pub fn contains(&self, other: &Bounds) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Ellipse { bounds: Bounds },
    RoundedRect { bounds: Bounds, radius: f32 },
    Polygon { points: Vec<Point> },
}

impl Shape {
    pub fn bounds(&self) -> Bounds {
        match self {
            Shape::Ellipse { bounds } | Shape::RoundedRect { bounds, .. } => *bounds,
            Shape::Polygon { points } => points.iter().fold(
                Bounds::new(f32::MAX, f32::MAX, f32::MIN, f32::MIN),
                |b, p| {
                    Bounds::new(
                        b.left.min(p.x),
                        b.top.min(p.y),
                        b.right.max(p.x),
                        b.bottom.max(p.y),
                    )
                },
            ),
        }
    }
}

/// A single filled primitive: geometry plus fill color.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeDescriptor {
    pub shape: Shape,
    pub fill: Rgb,
}

impl ShapeDescriptor {
    fn new(shape: Shape, fill: Rgb) -> Self {
        Self { shape, fill }
    }
}

/// A chunk body and the notch painted on top of it.
#[derive(Debug, Clone, PartialEq)]
pub struct TabChunk {
    pub body: ShapeDescriptor,
    pub notch: ShapeDescriptor,
}

/// Every shape of the icon for one canvas size, grouped by role.
///
/// Lengths are `canvas × ratio` truncated to whole units, so at the canonical
/// size all straight edges land on pixel boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct IconLayout {
    pub canvas: u32,
    pub disk: ShapeDescriptor,
    pub stick: ShapeDescriptor,
    pub tip: ShapeDescriptor,
    pub chunks: Vec<TabChunk>,
    pub knob_outer: ShapeDescriptor,
    pub knob_inner: ShapeDescriptor,
}

impl IconLayout {
    pub fn canonical() -> Self {
        Self::for_canvas(RENDER_SIZE)
    }

    pub fn for_canvas(canvas: u32) -> Self {
        let s = canvas as f32;
        let units = |ratio: f64| (canvas as f64 * ratio).trunc() as f32;
        let half = |len: f32| (len / 2.0).floor();
        let cx = half(s);

        let margin = units(DISK_MARGIN_RATIO);
        let disk = ShapeDescriptor::new(
            Shape::Ellipse {
                bounds: Bounds::new(margin, margin, s - margin, s - margin),
            },
            palette::BRAND_BLUE,
        );

        let stick_w = units(STICK_WIDTH_RATIO);
        let stick_x = half(s - stick_w);
        let stick = ShapeDescriptor::new(
            Shape::RoundedRect {
                bounds: Bounds::new(
                    stick_x,
                    units(STICK_TOP_RATIO),
                    stick_x + stick_w,
                    units(STICK_BOTTOM_RATIO),
                ),
                radius: half(stick_w),
            },
            palette::STICK_LIGHT,
        );

        let tip_top = units(TIP_TOP_RATIO);
        let tip = ShapeDescriptor::new(
            Shape::Polygon {
                points: vec![
                    Point::new(cx - half(stick_w), tip_top),
                    Point::new(cx + half(stick_w), tip_top),
                    Point::new(cx, units(TIP_APEX_RATIO)),
                ],
            },
            palette::STICK_LIGHT,
        );

        let chunk_radius = units(CHUNK_RADIUS_RATIO);
        let notch_w = units(NOTCH_WIDTH_RATIO);
        let notch_h = units(NOTCH_HEIGHT_RATIO);
        let notch_offset = units(NOTCH_OFFSET_RATIO);
        let notch_radius = units(NOTCH_RADIUS_RATIO).max(NOTCH_MIN_RADIUS);

        let chunks = TAB_CHUNKS
            .iter()
            .map(|spec| {
                let w = units(spec.width);
                let h = units(spec.height);
                let x = half(s - w);
                let y = units(spec.center_y) - half(h);
                TabChunk {
                    body: ShapeDescriptor::new(
                        Shape::RoundedRect {
                            bounds: Bounds::new(x, y, x + w, y + h),
                            radius: chunk_radius,
                        },
                        spec.body,
                    ),
                    notch: ShapeDescriptor::new(
                        Shape::RoundedRect {
                            bounds: Bounds::new(
                                x + notch_offset,
                                y,
                                x + notch_offset + notch_w,
                                y + notch_h,
                            ),
                            radius: notch_radius,
                        },
                        spec.notch,
                    ),
                }
            })
            .collect();

        let knob_center = Point::new(cx, units(KNOB_CENTER_RATIO));
        let knob_outer = ShapeDescriptor::new(
            Shape::Ellipse {
                bounds: Bounds::around(knob_center, units(KNOB_OUTER_RATIO)),
            },
            palette::STICK_LIGHT,
        );
        let knob_inner = ShapeDescriptor::new(
            Shape::Ellipse {
                bounds: Bounds::around(knob_center, units(KNOB_INNER_RATIO)),
            },
            palette::BRAND_BLUE,
        );

        Self {
            canvas,
            disk,
            stick,
            tip,
            chunks,
            knob_outer,
            knob_inner,
        }
    }

    /// Shapes back to front. Each notch directly follows its chunk body.
    pub fn paint_order(&self) -> Vec<&ShapeDescriptor> {
        let mut order = vec![&self.disk, &self.stick, &self.tip];
        for chunk in &self.chunks {
            order.push(&chunk.body);
            order.push(&chunk.notch);
        }
        order.push(&self.knob_outer);
        order.push(&self.knob_inner);
        order
    }
}
