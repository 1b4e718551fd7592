//! kiosk-surface: per-frame drawing API and the CPU rasterizer behind it.

mod canvas;
mod raster;

pub use canvas::{Canvas, DEFAULT_LINE_PAD, DEFAULT_PARAGRAPH_PAD};
pub use raster::{GlyphSource, SoftRenderer};
