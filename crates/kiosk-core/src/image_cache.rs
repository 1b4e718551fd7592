use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::imageops::FilterType;
use tiny_skia::{ColorU8, FillRule, Paint, Pixmap, Transform};

use crate::scene::{Color, Rect};
use crate::shapes::rounded_rect_path;

/// Size used for placeholders when the caller does not ask for one.
pub const DEFAULT_IMAGE_SIZE: (u32, u32) = (160, 160);
/// Placeholder fill unless a call site overrides it.
pub const DEFAULT_FALLBACK_COLOR: Color = Color::rgb(60, 60, 80);
/// Rounded overlay drawn over every placeholder.
pub const PLACEHOLDER_OVERLAY_COLOR: Color = Color::rgb(100, 100, 140);
const PLACEHOLDER_RADIUS: f32 = 16.0;
const MAX_PLACEHOLDER_DIM: u32 = 4096;

/// A decoded, premultiplied raster ready for drawing. Cheap to clone.
#[derive(Clone)]
pub struct Image {
    pixmap: Arc<Pixmap>,
    placeholder: bool,
}

impl Image {
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn size(&self) -> [f32; 2] {
        [self.width() as f32, self.height() as f32]
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// True when this image was generated because the asset was unavailable.
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    /// Deterministic substitute: a solid `fill` with a rounded overlay.
    pub fn placeholder(size: (u32, u32), fill: Color) -> Self {
        let (w, h) = (size.0.clamp(1, MAX_PLACEHOLDER_DIM), size.1.clamp(1, MAX_PLACEHOLDER_DIM));
        let mut pixmap = Pixmap::new(w, h).expect("placeholder dimensions are clamped");
        pixmap.fill(tiny_skia::Color::from_rgba8(fill.r, fill.g, fill.b, fill.a));
        if let Some(path) = rounded_rect_path(
            Rect::new(0.0, 0.0, pixmap.width() as f32, pixmap.height() as f32),
            PLACEHOLDER_RADIUS,
        ) {
            let mut paint = Paint::default();
            let c = PLACEHOLDER_OVERLAY_COLOR;
            paint.set_color_rgba8(c.r, c.g, c.b, c.a);
            paint.anti_alias = true;
            pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
        Self { pixmap: Arc::new(pixmap), placeholder: true }
    }

    fn from_rgba(rgba: &image::RgbaImage) -> Option<Self> {
        let (w, h) = rgba.dimensions();
        let mut pixmap = Pixmap::new(w, h)?;
        for (dst, src) in pixmap.pixels_mut().iter_mut().zip(rgba.pixels()) {
            let [r, g, b, a] = src.0;
            *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
        }
        Some(Self { pixmap: Arc::new(pixmap), placeholder: false })
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("placeholder", &self.placeholder)
            .finish()
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
struct CacheKey {
    path: PathBuf,
    size: Option<(u32, u32)>,
    fallback: Color,
}

/// Loads images relative to a root directory, substituting placeholders for
/// anything that is missing or cannot be decoded.
pub struct ImageProvider {
    root: PathBuf,
    map: HashMap<CacheKey, Image>,
}

impl ImageProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), map: HashMap::new() }
    }

    /// Load `path`, scaled to `size` when given. Never fails: unresolved
    /// references produce a placeholder of `size` (or 160x160).
    pub fn load(&mut self, path: &Path, size: Option<(u32, u32)>, fallback: Color) -> Image {
        let key = CacheKey { path: path.to_path_buf(), size, fallback };
        if let Some(img) = self.map.get(&key) {
            return img.clone();
        }
        let full = self.root.join(path);
        let img = match decode(&full, size) {
            Ok(img) => img,
            Err(reason) => {
                log::warn!("image {} unavailable ({reason}); using placeholder", full.display());
                Image::placeholder(size.unwrap_or(DEFAULT_IMAGE_SIZE), fallback)
            }
        };
        self.map.insert(key, img.clone());
        img
    }

    /// Number of distinct (path, size, fallback) requests served so far.
    pub fn cached(&self) -> usize {
        self.map.len()
    }
}

fn decode(path: &Path, size: Option<(u32, u32)>) -> Result<Image, String> {
    if !path.exists() {
        return Err("not found".to_string());
    }
    let rgba = image::open(path).map_err(|e| e.to_string())?.to_rgba8();
    let rgba = match size {
        Some((w, h)) if (w, h) != rgba.dimensions() => {
            image::imageops::resize(&rgba, w.max(1), h.max(1), FilterType::Triangle)
        }
        _ => rgba,
    };
    Image::from_rgba(&rgba).ok_or_else(|| "empty image".to_string())
}
