/// 8-bit sRGB fill color. Every shape in the icon is fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn channels(self) -> [u8; 3] {
        [self.0, self.1, self.2]
    }
}

/// Background disk and knob center, `#2563eb`
pub const BRAND_BLUE: Rgb = Rgb(37, 99, 235);
/// Stick, tip and knob rim, `#f8f9fa`
pub const STICK_LIGHT: Rgb = Rgb(248, 249, 250);

pub const RED: Rgb = Rgb(248, 113, 113);
pub const RED_NOTCH: Rgb = Rgb(252, 165, 165);
pub const AMBER: Rgb = Rgb(251, 191, 36);
pub const AMBER_NOTCH: Rgb = Rgb(253, 230, 138);
pub const GREEN: Rgb = Rgb(52, 211, 153);
pub const GREEN_NOTCH: Rgb = Rgb(110, 231, 183);
pub const PURPLE: Rgb = Rgb(167, 139, 250);
pub const PURPLE_NOTCH: Rgb = Rgb(196, 181, 253);
