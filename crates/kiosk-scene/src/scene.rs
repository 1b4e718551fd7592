use std::sync::Arc;

use anyhow::Result;
use kiosk_surface::Canvas;

use crate::action::Action;
use crate::catalog::{InfoPage, Institution};
use crate::services::Services;
use crate::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerMove { pos: [f32; 2] },
    PointerDown { pos: [f32; 2], button: PointerButton },
    /// Window close request.
    Quit,
}

/// What the loop should do after an event or update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    Continue,
    Exit,
}

/// A scene change requested during dispatch, applied by the host afterwards.
#[derive(Clone, Debug)]
pub enum Transition {
    Menu,
    Detail(Arc<Institution>),
    Info(InfoPage),
}

/// Per-dispatch context handed to scenes and controls.
///
/// Requests made through it are recorded, not applied: the host swaps the
/// current scene only after the scene's `handle` or `update` has returned.
pub struct SceneCtx<'a> {
    services: &'a Services,
    transition: Option<Transition>,
    exit: bool,
}

impl<'a> SceneCtx<'a> {
    pub fn new(services: &'a Services) -> Self {
        Self { services, transition: None, exit: false }
    }

    pub fn play_click(&self) {
        log::debug!("click");
        self.services.feedback.play();
    }

    pub fn dispatch(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::ShowMenu => self.request(Transition::Menu),
            Action::ShowDetail(institution) => self.request(Transition::Detail(institution.clone())),
            Action::ShowInfo(page) => self.request(Transition::Info(page.clone())),
            Action::OpenLink(url) => {
                log::info!("opening {url}");
                self.services.opener.open(url)?;
            }
            Action::Exit => self.exit = true,
        }
        Ok(())
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    pub fn exit_requested(&self) -> bool {
        self.exit
    }

    pub(crate) fn finish(self) -> (Option<Transition>, bool) {
        (self.transition, self.exit)
    }

    // First request in a dispatch wins.
    fn request(&mut self, transition: Transition) {
        if self.transition.is_none() {
            self.transition = Some(transition);
        }
    }
}

pub trait Scene {
    fn handle(&mut self, event: &InputEvent, ctx: &mut SceneCtx) -> Result<()>;

    fn update(&mut self, _dt: f32, _ctx: &mut SceneCtx) -> Result<()> {
        Ok(())
    }

    fn draw(&self, canvas: &mut Canvas, theme: &Theme);
}
