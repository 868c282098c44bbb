//! Color representation and interpolation

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self(r, g, b, 1.0)
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self(r, g, b, a)
    }

    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Builds a color from a packed `0xAARRGGBB` value, the layout list
    /// widgets on most platforms use for color resources.
    pub const fn from_argb(argb: u32) -> Self {
        Self::from_rgba_u8(
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        )
    }

    /// Packs the color back into `0xAARRGGBB`, rounding each channel.
    pub fn to_argb(&self) -> u32 {
        let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.3) << 24) | (channel(self.0) << 16) | (channel(self.1) << 8) | channel(self.2)
    }

    /// Linearly interpolates every channel towards `target`.
    ///
    /// `fraction` is clamped to `[0, 1]` so callers can pass raw progress
    /// values without overshooting either endpoint.
    pub fn lerp(&self, target: &Color, fraction: f32) -> Color {
        let t = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        let lerp = |start: f32, end: f32| start + (end - start) * t;
        Color(
            lerp(self.0, target.0),
            lerp(self.1, target.1),
            lerp(self.2, target.2),
            lerp(self.3, target.3),
        )
    }

    // Common color constants
    pub const BLACK: Color = Color(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);
    pub const RED: Color = Color(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Color = Color(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Color = Color(0.0, 0.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color(0.0, 0.0, 0.0, 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_unpacks_channels() {
        let color = Color::from_argb(0xFF_40_80_C0);
        assert_eq!(color.to_argb(), 0xFF_40_80_C0);
        assert_eq!(color.3, 1.0);
        assert_eq!(color, Color::from_rgb_u8(0x40, 0x80, 0xC0));
    }

    #[test]
    fn lerp_hits_endpoints_and_midpoint() {
        let from = Color::BLACK;
        let to = Color::WHITE;
        assert_eq!(from.lerp(&to, 0.0), from);
        assert_eq!(from.lerp(&to, 1.0), to);
        assert_eq!(from.lerp(&to, 0.5), Color(0.5, 0.5, 0.5, 1.0));
    }

    #[test]
    fn lerp_clamps_fraction() {
        let from = Color::RED;
        let to = Color::BLUE;
        assert_eq!(from.lerp(&to, 3.0), to);
        assert_eq!(from.lerp(&to, -1.0), from);
        assert_eq!(from.lerp(&to, f32::NAN), from);
    }
}
