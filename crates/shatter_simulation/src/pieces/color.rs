//! Linear RGB tint + three-stop gradient.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const RED: Rgb = Rgb::new(1.0, 0.0, 0.0);
    pub const GREEN: Rgb = Rgb::new(0.0, 1.0, 0.0);
    pub const YELLOW: Rgb = Rgb::new(1.0, 1.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// r = g = b = value
    pub const fn gray(value: f32) -> Self {
        Self::new(value, value, value)
    }

    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        Rgb::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }

    /// RGBA block for the render buffer (alpha всегда 1).
    pub fn to_rgba(self) -> [f32; 4] {
        [self.r, self.g, self.b, 1.0]
    }
}

/// Three-stop gradient: `t ∈ [0, 0.5]` → a..b, `t ∈ (0.5, 1]` → b..c.
///
/// `t` is clamped to [0, 1].
pub fn color_gradient(t: f32, a: Rgb, b: Rgb, c: Rgb) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    if t <= 0.5 {
        a.lerp(b, t * 2.0)
    } else {
        b.lerp(c, (t - 0.5) * 2.0)
    }
}

/// Warning gradient (green → yellow → red) used for near-miss tint and shot markers.
pub fn warning_gradient(t: f32) -> Rgb {
    color_gradient(t, Rgb::GREEN, Rgb::YELLOW, Rgb::RED)
}
