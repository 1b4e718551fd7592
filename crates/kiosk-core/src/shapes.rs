//! Path helpers for rounded shapes rendered through tiny-skia.

use tiny_skia::{Path, PathBuilder};

use crate::scene::Rect;

// Cubic bezier handle length for a quarter circle.
const KAPPA: f32 = 0.552_284_8;

/// Build a closed rounded-rectangle path. The radius is clamped to half the
/// shorter side. Returns `None` for empty rectangles.
pub fn rounded_rect_path(rect: Rect, radius: f32) -> Option<Path> {
    if rect.w <= 0.0 || rect.h <= 0.0 {
        return None;
    }
    let r = radius.max(0.0).min(rect.w * 0.5).min(rect.h * 0.5);
    let (x0, y0, x1, y1) = (rect.x, rect.y, rect.x + rect.w, rect.y + rect.h);
    let k = r * KAPPA;

    let mut pb = PathBuilder::new();
    pb.move_to(x0 + r, y0);
    pb.line_to(x1 - r, y0);
    pb.cubic_to(x1 - r + k, y0, x1, y0 + r - k, x1, y0 + r);
    pb.line_to(x1, y1 - r);
    pb.cubic_to(x1, y1 - r + k, x1 - r + k, y1, x1 - r, y1);
    pb.line_to(x0 + r, y1);
    pb.cubic_to(x0 + r - k, y1, x0, y1 - r + k, x0, y1 - r);
    pb.line_to(x0, y0 + r);
    pb.cubic_to(x0, y0 + r - k, x0 + r - k, y0, x0 + r, y0);
    pb.close();
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounded_path_bounds_match_rect() {
        let path = rounded_rect_path(Rect::new(10.0, 20.0, 160.0, 160.0), 16.0).unwrap();
        let b = path.bounds();
        assert!((b.left() - 10.0).abs() < 0.01);
        assert!((b.top() - 20.0).abs() < 0.01);
        assert!((b.right() - 170.0).abs() < 0.01);
        assert!((b.bottom() - 180.0).abs() < 0.01);
    }

    #[test]
    fn empty_rect_has_no_path() {
        assert!(rounded_rect_path(Rect::new(0.0, 0.0, 0.0, 10.0), 4.0).is_none());
    }
}
