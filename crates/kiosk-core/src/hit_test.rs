use std::borrow::Borrow;

use crate::scene::Rect;

/// Axis-aligned rectangle used for pointer containment tests.
///
/// Containment is half-open: the left and top edges are inside, the right and
/// bottom edges are not, so adjacent regions never both claim a pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HitRegion {
    rect: Rect,
}

impl HitRegion {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { rect: Rect::new(x, y, w, h) }
    }

    pub const fn from_rect(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn center(&self) -> [f32; 2] {
        self.rect.center()
    }

    pub fn contains(&self, pos: [f32; 2]) -> bool {
        let r = &self.rect;
        pos[0] >= r.x && pos[0] < r.x + r.w && pos[1] >= r.y && pos[1] < r.y + r.h
    }
}

impl From<Rect> for HitRegion {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}

/// Index of the first region, in iteration order, that contains `pos`.
pub fn first_hit<I>(regions: I, pos: [f32; 2]) -> Option<usize>
where
    I: IntoIterator,
    I::Item: Borrow<HitRegion>,
{
    regions.into_iter().position(|r| r.borrow().contains(pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_half_open() {
        let r = HitRegion::new(40.0, 480.0, 200.0, 56.0);
        assert!(r.contains([40.0, 480.0]));
        assert!(r.contains([140.0, 508.0]));
        assert!(r.contains([239.5, 535.9]));
        assert!(!r.contains([39.0, 508.0]));
        assert!(!r.contains([240.0, 508.0]));
        assert!(!r.contains([241.0, 508.0]));
        assert!(!r.contains([140.0, 536.0]));
    }

    #[test]
    fn first_hit_prefers_earlier_regions() {
        let regions = [
            HitRegion::new(0.0, 0.0, 100.0, 100.0),
            HitRegion::new(50.0, 50.0, 100.0, 100.0),
        ];
        assert_eq!(first_hit(&regions, [75.0, 75.0]), Some(0));
        assert_eq!(first_hit(&regions, [120.0, 120.0]), Some(1));
        assert_eq!(first_hit(&regions, [300.0, 10.0]), None);
    }
}
