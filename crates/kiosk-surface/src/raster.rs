//! CPU rasterizer: replays a [`DisplayList`] into a tiny-skia pixmap.

use anyhow::{Result, anyhow};
use kiosk_core::shapes::rounded_rect_path;
use kiosk_core::{Color, Command, DisplayList, FontSet, RasterizedGlyph, TextRun};
use tiny_skia::{FillRule, Paint, Pixmap, PixmapPaint, PremultipliedColorU8, Stroke, Transform};

/// Source of glyph coverage masks for text commands.
pub trait GlyphSource {
    fn glyphs(&self, run: &TextRun) -> Vec<RasterizedGlyph>;
}

impl GlyphSource for FontSet {
    fn glyphs(&self, run: &TextRun) -> Vec<RasterizedGlyph> {
        self.rasterize_run(run)
    }
}

pub struct SoftRenderer {
    pixmap: Pixmap,
}

impl SoftRenderer {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height)
            .ok_or_else(|| anyhow!("invalid framebuffer size {width}x{height}"))?;
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Draw `list` from scratch. Commands are replayed in ascending z; ties keep
    /// submission order.
    pub fn render(&mut self, list: &DisplayList, glyphs: &dyn GlyphSource) {
        let clear = list.clear.unwrap_or_default();
        self.pixmap.fill(skia_color(clear));

        let mut ordered: Vec<&Command> = list.commands.iter().collect();
        ordered.sort_by_key(|c| c.z());

        for cmd in ordered {
            match cmd {
                Command::DrawRect { rect, color, .. } => {
                    if let Some(r) = tiny_skia::Rect::from_xywh(rect.x, rect.y, rect.w, rect.h) {
                        self.pixmap.fill_rect(r, &paint(*color), Transform::identity(), None);
                    }
                }
                Command::DrawRoundedRect { rrect, color, .. } => {
                    if let Some(path) = rounded_rect_path(rrect.rect, rrect.radius) {
                        self.pixmap.fill_path(
                            &path,
                            &paint(*color),
                            FillRule::Winding,
                            Transform::identity(),
                            None,
                        );
                    }
                }
                Command::StrokeRoundedRect { rrect, width, color, .. } => {
                    if let Some(path) = rounded_rect_path(rrect.rect, rrect.radius) {
                        let stroke = Stroke { width: *width, ..Stroke::default() };
                        self.pixmap.stroke_path(&path, &paint(*color), &stroke, Transform::identity(), None);
                    }
                }
                Command::DrawText { run, .. } => {
                    for g in glyphs.glyphs(run) {
                        self.blend_glyph([run.pos[0] + g.offset[0], run.pos[1] + g.offset[1]], &g, run.color);
                    }
                }
                Command::DrawImage { image, origin, opacity, .. } => {
                    if *opacity == 0 {
                        continue;
                    }
                    let paint = PixmapPaint {
                        opacity: f32::from(*opacity) / 255.0,
                        ..PixmapPaint::default()
                    };
                    self.pixmap.draw_pixmap(
                        origin[0].round() as i32,
                        origin[1].round() as i32,
                        image.pixmap().as_ref(),
                        &paint,
                        Transform::identity(),
                        None,
                    );
                }
            }
        }
    }

    /// Copy the frame into a `0x00RRGGBB` framebuffer of `width` x `height`.
    /// Only the overlapping area is written; the rest of `out` is untouched.
    pub fn copy_to_xrgb(&self, out: &mut [u32], width: u32, height: u32) {
        let src_w = self.pixmap.width() as usize;
        if width == 0 || src_w == 0 {
            return;
        }
        let cols = src_w.min(width as usize);
        let rows = (self.pixmap.height() as usize).min(height as usize);
        let pixels = self.pixmap.pixels();
        for (src_row, dst_row) in pixels.chunks_exact(src_w).zip(out.chunks_mut(width as usize)).take(rows) {
            for (dst, px) in dst_row.iter_mut().zip(&src_row[..cols]) {
                let c = px.demultiply();
                *dst = Color::rgb(c.red(), c.green(), c.blue()).to_xrgb_u32();
            }
        }
    }

    // Source-over blend of a coverage mask tinted with `color`.
    fn blend_glyph(&mut self, origin: [f32; 2], glyph: &RasterizedGlyph, color: Color) {
        let (w, h) = (self.pixmap.width() as i32, self.pixmap.height() as i32);
        let gx = origin[0].round() as i32;
        let gy = origin[1].round() as i32;
        let pixels = self.pixmap.pixels_mut();

        for row in 0..glyph.height {
            let y = gy + row as i32;
            if y < 0 || y >= h {
                continue;
            }
            for col in 0..glyph.width {
                let x = gx + col as i32;
                if x < 0 || x >= w {
                    continue;
                }
                let cov = u32::from(glyph.coverage[row * glyph.width + col]);
                if cov == 0 {
                    continue;
                }
                let sa = cov * u32::from(color.a) / 255;
                let inv = 255 - sa;
                let dst = &mut pixels[(y * w + x) as usize];
                let blend = |s: u8, d: u8| (u32::from(s) * sa / 255 + u32::from(d) * inv / 255) as u8;
                let out_a = (sa + u32::from(dst.alpha()) * inv / 255) as u8;
                if let Some(px) = PremultipliedColorU8::from_rgba(
                    blend(color.r, dst.red()),
                    blend(color.g, dst.green()),
                    blend(color.b, dst.blue()),
                    out_a,
                ) {
                    *dst = px;
                }
            }
        }
    }
}

fn skia_color(c: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn paint(c: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(c.r, c.g, c.b, c.a);
    paint.anti_alias = true;
    paint
}
