//! kiosk-core: geometry, display lists, hit regions, text metrics and images
//! shared by the kiosk launcher crates.

mod display_list;
mod hit_test;
mod image_cache;
mod painter;
mod scene;
pub mod shapes;
mod text;
pub mod text_layout;

pub use display_list::*;
pub use hit_test::*;
pub use image_cache::*;
pub use painter::*;
pub use scene::*;
pub use text::*;
pub use text_layout::{LaidLine, LineSpacing, ParagraphLayout, wrap_paragraphs};
