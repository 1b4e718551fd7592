use anyhow::Result;
use kiosk_core::{FontRole, HitRegion, Rect, RoundedRect};
use kiosk_surface::Canvas;

use crate::action::Action;
use crate::scene::{InputEvent, PointerButton, SceneCtx};
use crate::theme::ButtonStyle;

/// Result of a pointer press on a button
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ButtonClickResult {
    /// The action was dispatched
    Clicked,
    /// Wrong button or outside the region
    Ignored,
}

/// A labelled hit region bound to an [`Action`].
///
/// Hover follows pointer motion only; a press does not update it.
#[derive(Clone, Debug)]
pub struct Button {
    region: HitRegion,
    label: String,
    action: Action,
    style: ButtonStyle,
    hover: bool,
}

impl Button {
    pub fn new(label: impl Into<String>, rect: Rect, action: Action, style: ButtonStyle) -> Self {
        Self { region: HitRegion::from_rect(rect), label: label.into(), action, style, hover: false }
    }

    pub fn region(&self) -> HitRegion {
        self.region
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn action(&self) -> &Action {
        &self.action
    }

    pub fn is_hovered(&self) -> bool {
        self.hover
    }

    pub fn on_pointer_move(&mut self, pos: [f32; 2]) {
        self.hover = self.region.contains(pos);
    }

    /// Fire the action for a primary press inside the region.
    pub fn on_pointer_down(
        &self,
        pos: [f32; 2],
        button: PointerButton,
        ctx: &mut SceneCtx,
    ) -> Result<ButtonClickResult> {
        if button != PointerButton::Primary || !self.region.contains(pos) {
            return Ok(ButtonClickResult::Ignored);
        }
        ctx.play_click();
        ctx.dispatch(&self.action)?;
        Ok(ButtonClickResult::Clicked)
    }

    pub fn handle(&mut self, event: &InputEvent, ctx: &mut SceneCtx) -> Result<ButtonClickResult> {
        match *event {
            InputEvent::PointerMove { pos } => {
                self.on_pointer_move(pos);
                Ok(ButtonClickResult::Ignored)
            }
            InputEvent::PointerDown { pos, button } => self.on_pointer_down(pos, button, ctx),
            InputEvent::Quit => Ok(ButtonClickResult::Ignored),
        }
    }

    pub fn render(&self, canvas: &mut Canvas, z: i32) {
        draw_button_face(canvas, self.region.rect(), &self.label, &self.style, self.hover, z);
    }
}

/// Rounded background, optional border and a centered label.
pub fn draw_button_face(
    canvas: &mut Canvas,
    rect: Rect,
    label: &str,
    style: &ButtonStyle,
    hover: bool,
    z: i32,
) {
    let rrect = RoundedRect::new(rect, style.radius);
    canvas.fill_rounded_rect(rrect, if hover { style.bg_hover } else { style.bg }, z);
    if let Some(border) = style.border {
        canvas.stroke_rounded_rect(rrect, style.border_width, border, z + 1);
    }
    canvas.draw_text_centered(rect.center(), label, style.label_size, FontRole::Regular, style.fg, z + 2);
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::services::{ClickFeedback, Services, SystemOpener};

    struct CountingFeedback(Rc<Cell<u32>>);

    impl ClickFeedback for CountingFeedback {
        fn play(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn services(clicks: &Rc<Cell<u32>>) -> Services {
        Services::new(Box::new(CountingFeedback(clicks.clone())), Box::new(SystemOpener))
    }

    fn back() -> Button {
        Button::new("Back", Rect::new(40.0, 480.0, 200.0, 56.0), Action::ShowMenu, ButtonStyle::primary(26.0))
    }

    #[test]
    fn fires_only_for_primary_presses_inside() {
        let clicks = Rc::new(Cell::new(0));
        let services = services(&clicks);
        let button = back();

        let mut ctx = SceneCtx::new(&services);
        assert_eq!(button.on_pointer_down([39.0, 508.0], PointerButton::Primary, &mut ctx).unwrap(), ButtonClickResult::Ignored);
        assert_eq!(button.on_pointer_down([241.0, 508.0], PointerButton::Primary, &mut ctx).unwrap(), ButtonClickResult::Ignored);
        assert_eq!(button.on_pointer_down([140.0, 508.0], PointerButton::Secondary, &mut ctx).unwrap(), ButtonClickResult::Ignored);
        assert!(ctx.transition().is_none());
        assert_eq!(clicks.get(), 0);

        assert_eq!(button.on_pointer_down([140.0, 508.0], PointerButton::Primary, &mut ctx).unwrap(), ButtonClickResult::Clicked);
        assert!(matches!(ctx.transition(), Some(crate::scene::Transition::Menu)));
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn hover_tracks_motion_not_presses() {
        let clicks = Rc::new(Cell::new(0));
        let services = services(&clicks);
        let mut button = back();
        let mut ctx = SceneCtx::new(&services);

        // Press inside without any prior motion: fires, hover untouched.
        button.handle(&InputEvent::PointerDown { pos: [140.0, 508.0], button: PointerButton::Primary }, &mut ctx).unwrap();
        assert!(!button.is_hovered());
        assert_eq!(clicks.get(), 1);

        button.handle(&InputEvent::PointerMove { pos: [140.0, 508.0] }, &mut ctx).unwrap();
        assert!(button.is_hovered());
        button.handle(&InputEvent::PointerMove { pos: [240.0, 508.0] }, &mut ctx).unwrap();
        assert!(!button.is_hovered());
    }

    #[test]
    fn exit_action_sets_flag() {
        let clicks = Rc::new(Cell::new(0));
        let services = services(&clicks);
        let exit = Button::new("Exit", Rect::new(600.0, 480.0, 240.0, 60.0), Action::Exit, ButtonStyle::primary(26.0));
        let mut ctx = SceneCtx::new(&services);
        exit.on_pointer_down([700.0, 500.0], PointerButton::Primary, &mut ctx).unwrap();
        assert!(ctx.exit_requested());
        assert!(ctx.transition().is_none());
    }
}
