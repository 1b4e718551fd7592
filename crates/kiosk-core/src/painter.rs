use crate::display_list::{Command, DisplayList, Viewport};
use crate::image_cache::Image;
use crate::scene::*;

pub struct Painter {
    list: DisplayList,
}

impl Painter {
    pub fn begin_frame(viewport: Viewport) -> Self {
        Self {
            list: DisplayList {
                viewport,
                clear: None,
                commands: Vec::new(),
            },
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.list.viewport
    }

    pub fn clear(&mut self, color: Color) {
        self.list.clear = Some(color);
    }

    pub fn rect(&mut self, rect: Rect, color: Color, z: i32) {
        self.list.commands.push(Command::DrawRect { rect, color, z });
    }

    pub fn rounded_rect(&mut self, rrect: RoundedRect, color: Color, z: i32) {
        self.list.commands.push(Command::DrawRoundedRect { rrect, color, z });
    }

    pub fn stroke_rounded_rect(&mut self, rrect: RoundedRect, width: f32, color: Color, z: i32) {
        self.list.commands.push(Command::StrokeRoundedRect {
            rrect,
            width,
            color,
            z,
        });
    }

    pub fn text(&mut self, run: TextRun, z: i32) {
        self.list.commands.push(Command::DrawText { run, z });
    }

    /// Queue an already-decoded image at `origin` (top-left) with the given opacity.
    pub fn image(&mut self, image: Image, origin: [f32; 2], opacity: u8, z: i32) {
        self.list.commands.push(Command::DrawImage {
            image,
            origin,
            opacity,
            z,
        });
    }

    /// Get a reference to the display list built so far.
    pub fn display_list(&self) -> &DisplayList {
        &self.list
    }

    pub fn finish(self) -> DisplayList {
        self.list
    }
}
