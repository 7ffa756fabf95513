//! Colour values handed to the renderer.
//!
//! Kept as plain data so the scene can be inspected in host tests; the
//! canvas backend turns them into CSS colour strings.

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    /// 8-bit channels plus alpha in [0, 1].
    Rgba(u8, u8, u8, f32),
    /// Hue in degrees, saturation and lightness in percent, alpha in [0, 1].
    Hsla(f32, f32, f32, f32),
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Color::Rgba(r, g, b, a)
    }

    pub fn alpha(&self) -> f32 {
        match *self {
            Color::Rgba(_, _, _, a) | Color::Hsla(_, _, _, a) => a,
        }
    }

    /// Same colour with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        match self {
            Color::Rgba(r, g, b, _) => Color::Rgba(r, g, b, a),
            Color::Hsla(h, s, l, _) => Color::Hsla(h, s, l, a),
        }
    }

    pub fn css(&self) -> String {
        match *self {
            Color::Rgba(r, g, b, a) => format!("rgba({}, {}, {}, {})", r, g, b, a),
            Color::Hsla(h, s, l, a) => format!("hsla({}, {}%, {}%, {})", h, s, l, a),
        }
    }
}

// Palette
pub const RING_STROKE: Color = Color::rgba(160, 220, 255, 1.0);
pub const BLOOM: Color = Color::rgba(120, 240, 255, 0.25);
pub const ARC_STROKE: Color = Color::rgba(140, 220, 255, 0.35);
pub const STAR_FILL: Color = Color::rgba(180, 240, 255, 1.0);
pub const COMET_TRAIL: Color = Color::rgba(120, 240, 255, 1.0);
pub const EMBLEM_STROKE: Color = Color::rgba(180, 245, 255, 0.9);

pub const PARTICLE_SATURATION: f32 = 85.0;
pub const PARTICLE_LIGHTNESS: f32 = 70.0;
pub const PARTICLE_ALPHA: f32 = 0.8;
