use kiosk_core::{
    Color, DisplayList, FontRole, Image, LineSpacing, Painter, ParagraphLayout, Rect, RoundedRect,
    TextMeasure, TextRun, Viewport, wrap_paragraphs,
};

/// Pixel padding added to the font line size between wrapped lines.
pub const DEFAULT_LINE_PAD: f32 = 2.0;
/// Pixel padding added to the font line size after each paragraph.
pub const DEFAULT_PARAGRAPH_PAD: f32 = 8.0;

/// High-level per-frame drawing API.
///
/// Wraps a [`Painter`] and the text metrics used for centering and wrapping,
/// so scenes can position text without touching glyph data. The result of a
/// frame is a [`DisplayList`]; rasterization happens elsewhere.
pub struct Canvas<'a> {
    painter: Painter,
    metrics: &'a dyn TextMeasure,
    line_pad: f32,
    paragraph_pad: f32,
}

impl<'a> Canvas<'a> {
    pub fn new(viewport: Viewport, metrics: &'a dyn TextMeasure) -> Self {
        Self {
            painter: Painter::begin_frame(viewport),
            metrics,
            line_pad: DEFAULT_LINE_PAD,
            paragraph_pad: DEFAULT_PARAGRAPH_PAD,
        }
    }

    /// Override the paddings used by [`Canvas::draw_paragraphs`].
    pub fn set_paragraph_padding(&mut self, line_pad: f32, paragraph_pad: f32) {
        self.line_pad = line_pad;
        self.paragraph_pad = paragraph_pad;
    }

    pub fn viewport(&self) -> Viewport {
        self.painter.viewport()
    }

    /// Set the frame clear color.
    pub fn clear(&mut self, color: Color) {
        self.painter.clear(color);
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color, z: i32) {
        self.painter.rect(rect, color, z);
    }

    /// Draw a filled rounded rectangle.
    pub fn fill_rounded_rect(&mut self, rrect: RoundedRect, color: Color, z: i32) {
        self.painter.rounded_rect(rrect, color, z);
    }

    /// Draw a rounded rectangle outline. Zero width draws nothing.
    pub fn stroke_rounded_rect(&mut self, rrect: RoundedRect, width: f32, color: Color, z: i32) {
        if width > 0.0 {
            self.painter.stroke_rounded_rect(rrect, width, color, z);
        }
    }

    pub fn line_size(&self, size: f32, role: FontRole) -> f32 {
        self.metrics.line_size(size, role)
    }

    /// Draw a single line with its top-left corner at `origin`.
    pub fn draw_text_run(
        &mut self,
        origin: [f32; 2],
        text: impl Into<String>,
        size: f32,
        role: FontRole,
        color: Color,
        z: i32,
    ) {
        self.painter.text(TextRun { text: text.into(), pos: origin, size, role, color }, z);
    }

    /// Draw a single line whose measured box is centered on `center`.
    pub fn draw_text_centered(
        &mut self,
        center: [f32; 2],
        text: &str,
        size: f32,
        role: FontRole,
        color: Color,
        z: i32,
    ) {
        let w = self.metrics.advance(text, size, role);
        let h = self.metrics.line_size(size, role);
        let rect = Rect::centered_at(center, w, h);
        self.draw_text_run([rect.x, rect.y], text, size, role, color, z);
    }

    /// Word-wrap `text` into `max_width` starting at `origin` and draw every
    /// line. Returns the laid-out lines relative to `origin`.
    pub fn draw_paragraphs(
        &mut self,
        origin: [f32; 2],
        text: &str,
        size: f32,
        color: Color,
        max_width: f32,
        z: i32,
    ) -> ParagraphLayout {
        let role = FontRole::Regular;
        let spacing = LineSpacing::from_line_size(
            self.metrics.line_size(size, role),
            self.line_pad,
            self.paragraph_pad,
        );
        let metrics = self.metrics;
        let layout = wrap_paragraphs(text, max_width, spacing, |s| metrics.advance(s, size, role));
        for line in &layout.lines {
            self.draw_text_run([origin[0], origin[1] + line.y], line.text.clone(), size, role, color, z);
        }
        layout
    }

    /// Draw an image centered on `center`; returns the rectangle it covers.
    pub fn draw_image_centered(&mut self, image: &Image, center: [f32; 2], opacity: u8, z: i32) -> Rect {
        let [w, h] = image.size();
        let rect = Rect::centered_at(center, w, h);
        self.painter.image(image.clone(), [rect.x, rect.y], opacity, z);
        rect
    }

    /// Get a reference to the display list built so far.
    pub fn display_list(&self) -> &DisplayList {
        self.painter.display_list()
    }

    pub fn finish(self) -> DisplayList {
        self.painter.finish()
    }
}
