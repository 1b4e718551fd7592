//! Text metrics and glyph rasterization.
//!
//! [`FontSet`] holds a regular and a bold `fontdue` face, discovered through
//! `fontdb` or loaded from explicit paths. Everything that lays text out goes
//! through the [`TextMeasure`] trait so layout code can run without fonts.

use std::path::{Path, PathBuf};

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};
use fontdue::{Font, FontSettings};

use crate::scene::{FontRole, TextRun};

#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("no suitable system font found for {0:?} text")]
    NotFound(FontRole),
    #[error("failed to read font file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse font: {0}")]
    Parse(&'static str),
}

/// Width and line-height queries used by layout.
pub trait TextMeasure {
    /// Horizontal advance of `text` rendered at `size` pixels.
    fn advance(&self, text: &str, size: f32, role: FontRole) -> f32;

    /// Distance between consecutive baselines at `size` pixels.
    fn line_size(&self, size: f32, role: FontRole) -> f32;
}

/// Coverage mask for one glyph, positioned relative to the run origin.
#[derive(Clone, Debug)]
pub struct RasterizedGlyph {
    pub offset: [f32; 2],
    pub width: usize,
    pub height: usize,
    /// Row-major 8-bit coverage, `width * height` bytes.
    pub coverage: Vec<u8>,
}

pub struct FontSet {
    regular: Font,
    bold: Font,
}

impl FontSet {
    /// Build from raw font bytes. Without bold bytes the regular face is reused.
    pub fn from_bytes(regular: &[u8], bold: Option<&[u8]>) -> Result<Self, FontError> {
        let regular_font = parse_font(regular.to_vec(), 0)?;
        let bold_font = match bold {
            Some(bytes) => parse_font(bytes.to_vec(), 0)?,
            None => parse_font(regular.to_vec(), 0)?,
        };
        Ok(Self { regular: regular_font, bold: bold_font })
    }

    /// Load explicit font files if given, falling back to system fonts for
    /// whichever face is missing.
    pub fn load(regular: Option<&Path>, bold: Option<&Path>) -> Result<Self, FontError> {
        let regular = match regular {
            Some(path) => read_font(path)?,
            None => system_font(FontRole::Regular)?,
        };
        let bold = match bold {
            Some(path) => read_font(path)?,
            None => system_font(FontRole::Bold).or_else(|err| {
                log::warn!("{err}; drawing bold text with the regular face");
                Ok::<Font, FontError>(regular.clone())
            })?,
        };
        Ok(Self { regular, bold })
    }

    pub fn font(&self, role: FontRole) -> &Font {
        match role {
            FontRole::Regular => &self.regular,
            FontRole::Bold => &self.bold,
        }
    }

    /// Rasterize a run into coverage masks with offsets relative to `run.pos`.
    pub fn rasterize_run(&self, run: &TextRun) -> Vec<RasterizedGlyph> {
        let font = self.font(run.role);
        let mut layout = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings {
            x: 0.0,
            y: 0.0,
            ..LayoutSettings::default()
        });
        layout.append(&[font], &TextStyle::new(&run.text, run.size.max(1.0), 0));

        let mut out = Vec::new();
        for g in layout.glyphs() {
            let (metrics, bitmap) = font.rasterize_indexed(g.key.glyph_index, g.key.px);
            if metrics.width == 0 || metrics.height == 0 {
                continue;
            }
            // Layout already gives the glyph's top-left for PositiveYDown.
            out.push(RasterizedGlyph {
                offset: [g.x, g.y],
                width: metrics.width,
                height: metrics.height,
                coverage: bitmap,
            });
        }
        out
    }
}

impl TextMeasure for FontSet {
    fn advance(&self, text: &str, size: f32, role: FontRole) -> f32 {
        let font = self.font(role);
        text.chars().map(|c| font.metrics(c, size).advance_width).sum()
    }

    fn line_size(&self, size: f32, role: FontRole) -> f32 {
        self.font(role)
            .horizontal_line_metrics(size)
            .map(|lm| lm.new_line_size)
            .unwrap_or(size * 1.2)
    }
}

/// Font-free metrics: every character advances `size * advance_factor`.
///
/// Used for headless layout, where deterministic widths matter more than
/// typographic accuracy.
#[derive(Clone, Copy, Debug)]
pub struct FixedAdvance {
    pub advance_factor: f32,
    pub line_factor: f32,
}

impl Default for FixedAdvance {
    fn default() -> Self {
        Self { advance_factor: 0.5, line_factor: 1.2 }
    }
}

impl TextMeasure for FixedAdvance {
    fn advance(&self, text: &str, size: f32, _role: FontRole) -> f32 {
        text.chars().count() as f32 * size * self.advance_factor
    }

    fn line_size(&self, size: f32, _role: FontRole) -> f32 {
        size * self.line_factor
    }
}

fn parse_font(bytes: Vec<u8>, index: u32) -> Result<Font, FontError> {
    Font::from_bytes(
        bytes,
        FontSettings {
            collection_index: index,
            ..FontSettings::default()
        },
    )
    .map_err(FontError::Parse)
}

fn read_font(path: &Path) -> Result<Font, FontError> {
    let bytes = std::fs::read(path).map_err(|source| FontError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_font(bytes, 0)
}

fn system_font(role: FontRole) -> Result<Font, FontError> {
    use fontdb::{Database, Family, Query, Stretch, Style, Weight};

    let mut db = Database::new();
    db.load_system_fonts();

    let weight = match role {
        FontRole::Regular => Weight::NORMAL,
        FontRole::Bold => Weight::BOLD,
    };
    let id = db
        .query(&Query {
            families: &[
                Family::Name("Montserrat"),
                Family::SansSerif,
                Family::Name("Segoe UI"),
                Family::Name("Arial"),
                Family::Name("DejaVu Sans"),
            ],
            weight,
            stretch: Stretch::Normal,
            style: Style::Normal,
        })
        .ok_or(FontError::NotFound(role))?;

    let (bytes, index) = db
        .with_face_data(id, |data, index| (data.to_vec(), index))
        .ok_or(FontError::NotFound(role))?;
    log::debug!("loaded system font for {role:?} text (face index {index})");
    parse_font(bytes, index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_advance_is_linear_in_chars() {
        let m = FixedAdvance::default();
        assert_eq!(m.advance("abcd", 20.0, FontRole::Regular), 40.0);
        assert_eq!(m.advance("", 20.0, FontRole::Bold), 0.0);
        assert_eq!(m.line_size(20.0, FontRole::Regular), 24.0);
    }

    #[test]
    fn garbage_bytes_are_a_parse_error() {
        let err = FontSet::from_bytes(b"definitely not a font", None).err();
        assert!(matches!(err, Some(FontError::Parse(_))));
    }

    #[test]
    fn missing_font_file_reports_path() {
        let err = FontSet::load(Some(Path::new("/nonexistent/font.ttf")), None).err();
        match err {
            Some(FontError::Io { path, .. }) => assert!(path.ends_with("font.ttf")),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
