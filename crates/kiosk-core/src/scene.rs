/// Straight (non-premultiplied) sRGB color with 8-bit channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn from_rgb_array(c: [u8; 3]) -> Self {
        Self::rgb(c[0], c[1], c[2])
    }

    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Pack into the `0x00RRGGBB` layout used by window framebuffers.
    #[inline]
    pub const fn to_xrgb_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of the given size whose center sits at `center`.
    pub fn centered_at(center: [f32; 2], w: f32, h: f32) -> Self {
        Self { x: center[0] - w * 0.5, y: center[1] - h * 0.5, w, h }
    }

    pub fn center(&self) -> [f32; 2] {
        [self.x + self.w * 0.5, self.y + self.h * 0.5]
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundedRect {
    pub rect: Rect,
    pub radius: f32,
}

impl RoundedRect {
    pub const fn new(rect: Rect, radius: f32) -> Self {
        Self { rect, radius }
    }
}

/// Which face of the loaded font family a run is drawn with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontRole {
    #[default]
    Regular,
    Bold,
}

/// A single line of text. `pos` is the top-left corner of the line box.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub pos: [f32; 2],
    pub size: f32,
    pub role: FontRole,
    pub color: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_round_trips_center() {
        let r = Rect::centered_at([450.0, 280.0], 223.0, 220.0);
        assert_eq!(r.center(), [450.0, 280.0]);
        assert_eq!(r.right() - r.x, 223.0);
    }

    #[test]
    fn xrgb_packing() {
        assert_eq!(Color::rgb(18, 18, 24).to_xrgb_u32(), 0x0012_1218);
    }
}
