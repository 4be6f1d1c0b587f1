//! Linear RGBA color with HSV shifting for per-element color jitter.

use serde::{Deserialize, Serialize};

/// An RGBA color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// A shift applied in HSV space. Hue is a fraction of a full turn.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HsvShift {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
    pub alpha: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Builds a color from hue (fraction of a turn), saturation, value and alpha.
    pub fn from_hsva(h: f32, s: f32, v: f32, a: f32) -> Self {
        let h = h.rem_euclid(1.0) * 360.0;
        let c = v * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = v - c;

        let (r, g, b) = if h < 60.0 {
            (c, x, 0.0)
        } else if h < 120.0 {
            (x, c, 0.0)
        } else if h < 180.0 {
            (0.0, c, x)
        } else if h < 240.0 {
            (0.0, x, c)
        } else if h < 300.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Self::new(r + m, g + m, b + m, a)
    }

    /// Returns `(hue, saturation, value)` with hue as a fraction of a turn.
    pub fn to_hsv(self) -> (f32, f32, f32) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;

        let h = if delta == 0.0 {
            0.0
        } else if max == self.r {
            60.0 * (((self.g - self.b) / delta) % 6.0)
        } else if max == self.g {
            60.0 * (((self.b - self.r) / delta) + 2.0)
        } else {
            60.0 * (((self.r - self.g) / delta) + 4.0)
        };
        let h = if h < 0.0 { h + 360.0 } else { h };
        let s = if max == 0.0 { 0.0 } else { delta / max };

        (h / 360.0, s, max)
    }

    /// Shifts the color in HSV space.
    ///
    /// Hue wraps around the color wheel; saturation, value and alpha clamp
    /// to `[0, 1]`. A zero shift returns the color unchanged.
    pub fn shifted(self, shift: HsvShift) -> Self {
        if shift == HsvShift::default() {
            return self;
        }
        let (h, s, v) = self.to_hsv();
        let h = (h + shift.hue).rem_euclid(1.0).clamp(0.0, 1.0);
        let s = (s + shift.saturation).clamp(0.0, 1.0);
        let v = (v + shift.value).clamp(0.0, 1.0);
        let a = (self.a + shift.alpha).clamp(0.0, 1.0);
        Self::from_hsva(h, s, v, a)
    }

    /// Linearly interpolates between two colors.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

    /// Component-wise product, used to tint a layer color by a point color.
    pub fn multiply(self, other: Self) -> Self {
        Self::new(
            self.r * other.r,
            self.g * other.g,
            self.b * other.b,
            self.a * other.a,
        )
    }

    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[f32; 4]> for Rgba {
    fn from(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

impl From<Rgba> for [f32; 4] {
    fn from(c: Rgba) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hsv_primaries() {
        let red = Rgba::new(1.0, 0.0, 0.0, 1.0);
        let (h, s, v) = red.to_hsv();
        assert_relative_eq!(h, 0.0);
        assert_relative_eq!(s, 1.0);
        assert_relative_eq!(v, 1.0);

        let (h, _, _) = Rgba::new(0.0, 0.0, 1.0, 1.0).to_hsv();
        assert_relative_eq!(h, 2.0 / 3.0, epsilon = 1e-6);
    }

    #[test]
    fn test_hue_shift_wraps() {
        let red = Rgba::new(1.0, 0.0, 0.0, 1.0);
        let shifted = red.shifted(HsvShift {
            hue: -1.0 / 3.0,
            ..Default::default()
        });
        // -120 degrees from red lands on blue
        assert_relative_eq!(shifted.b, 1.0, epsilon = 1e-5);
        assert_relative_eq!(shifted.r, 0.0, epsilon = 1e-5);
        assert_relative_eq!(shifted.g, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_value_and_alpha_clamp() {
        let grey = Rgba::new(0.5, 0.5, 0.5, 0.5);
        let bright = grey.shifted(HsvShift {
            value: 2.0,
            alpha: -3.0,
            ..Default::default()
        });
        assert_relative_eq!(bright.r, 1.0, epsilon = 1e-6);
        assert_eq!(bright.a, 0.0);
    }

    #[test]
    fn test_zero_shift_is_identity() {
        let c = Rgba::new(0.2, 0.4, 0.6, 0.8);
        assert_eq!(c.shifted(HsvShift::default()), c);
    }

    #[test]
    fn test_lerp_and_multiply() {
        let mid = Rgba::BLACK.lerp(Rgba::WHITE, 0.5);
        assert_relative_eq!(mid.g, 0.5);
        assert_eq!(mid.a, 1.0);
        let tinted = Rgba::new(1.0, 0.5, 0.0, 1.0).multiply(Rgba::new(0.5, 0.5, 0.5, 0.5));
        assert_eq!(tinted, Rgba::new(0.5, 0.25, 0.0, 0.5));
    }
}
