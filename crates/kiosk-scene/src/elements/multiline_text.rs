use kiosk_core::{Color, ParagraphLayout};
use kiosk_surface::Canvas;

/// Left-aligned, word-wrapped text block.
///
/// Paragraphs are separated by `\n`; empty paragraphs leave a blank gap.
pub struct MultilineText<'a> {
    /// Top-left corner of the first line
    pub pos: [f32; 2],
    pub text: &'a str,
    /// Font size in pixels
    pub size: f32,
    pub color: Color,
    /// Lines are kept strictly narrower than this, except single words that
    /// cannot fit on any line.
    pub max_width: f32,
}

impl MultilineText<'_> {
    pub fn render(&self, canvas: &mut Canvas, z: i32) -> ParagraphLayout {
        canvas.draw_paragraphs(self.pos, self.text, self.size, self.color, self.max_width, z)
    }
}
