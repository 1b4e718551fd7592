use crate::image_cache::Image;
use crate::scene::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Debug)]
pub enum Command {
    DrawRect { rect: Rect, color: Color, z: i32 },
    DrawRoundedRect { rrect: RoundedRect, color: Color, z: i32 },
    StrokeRoundedRect { rrect: RoundedRect, width: f32, color: Color, z: i32 },
    DrawText { run: TextRun, z: i32 },
    /// Raster image drawn at its native size with a top-left `origin`.
    DrawImage { image: Image, origin: [f32; 2], opacity: u8, z: i32 },
}

impl Command {
    pub fn z(&self) -> i32 {
        match self {
            Command::DrawRect { z, .. }
            | Command::DrawRoundedRect { z, .. }
            | Command::StrokeRoundedRect { z, .. }
            | Command::DrawText { z, .. }
            | Command::DrawImage { z, .. } => *z,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    pub viewport: Viewport,
    /// Color the frame is cleared to before any command runs.
    pub clear: Option<Color>,
    pub commands: Vec<Command>,
}

impl DisplayList {
    /// Text runs in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.commands.iter().filter_map(|c| match c {
            Command::DrawText { run, .. } => Some(run),
            _ => None,
        })
    }

    /// Image draws in draw order as `(image, origin, opacity)`.
    pub fn images(&self) -> impl Iterator<Item = (&Image, [f32; 2], u8)> {
        self.commands.iter().filter_map(|c| match c {
            Command::DrawImage { image, origin, opacity, .. } => Some((image, *origin, *opacity)),
            _ => None,
        })
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|r| r.text.contains(needle))
    }
}
