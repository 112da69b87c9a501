/// RGBA; each channel is 8 bit unsigned
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// RGB; each channel is 32 bit signed
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct ColorI32 {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self::new_rgba(r, g, b, 255)
    }

    pub fn new_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_color_i32(&self) -> ColorI32 {
        ColorI32::new(self)
    }
}

impl ColorI32 {
    pub fn new(color: &Color) -> Self {
        Self {
            r: color.r as i32,
            g: color.g as i32,
            b: color.b as i32,
        }
    }

    pub fn diff(&self, other: &Self) -> Self {
        Self {
            r: self.r - other.r,
            g: self.g - other.g,
            b: self.b - other.b,
        }
    }

    /// Channel-wise minimum
    pub fn min_components(&self, other: &Self) -> Self {
        Self {
            r: self.r.min(other.r),
            g: self.g.min(other.g),
            b: self.b.min(other.b),
        }
    }

    /// Channel-wise maximum
    pub fn max_components(&self, other: &Self) -> Self {
        Self {
            r: self.r.max(other.r),
            g: self.g.max(other.g),
            b: self.b.max(other.b),
        }
    }

    /// L-infinity distance between two colors
    pub fn max_abs_diff(&self, other: &Self) -> i32 {
        let d = self.diff(other);
        d.r.abs().max(d.g.abs()).max(d.b.abs())
    }

    pub fn min_channel(&self) -> i32 {
        self.r.min(self.g).min(self.b)
    }
}
