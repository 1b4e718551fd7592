use anyhow::Result;
use kiosk_surface::Canvas;

use crate::catalog::Content;
use crate::scene::{InputEvent, Scene, SceneCtx, Signal, Transition};
use crate::scenes::{Detail, InfoScreen, Menu, Splash};
use crate::services::Services;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneKind {
    Splash,
    Menu,
    Detail,
    Info,
}

/// The one scene currently on screen.
#[derive(Clone, Debug)]
pub enum CurrentScene {
    Splash(Splash),
    Menu(Menu),
    Detail(Detail),
    Info(InfoScreen),
}

impl CurrentScene {
    pub fn kind(&self) -> SceneKind {
        match self {
            CurrentScene::Splash(_) => SceneKind::Splash,
            CurrentScene::Menu(_) => SceneKind::Menu,
            CurrentScene::Detail(_) => SceneKind::Detail,
            CurrentScene::Info(_) => SceneKind::Info,
        }
    }

    fn as_scene(&self) -> &dyn Scene {
        match self {
            CurrentScene::Splash(s) => s,
            CurrentScene::Menu(s) => s,
            CurrentScene::Detail(s) => s,
            CurrentScene::Info(s) => s,
        }
    }

    fn as_scene_mut(&mut self) -> &mut dyn Scene {
        match self {
            CurrentScene::Splash(s) => s,
            CurrentScene::Menu(s) => s,
            CurrentScene::Detail(s) => s,
            CurrentScene::Info(s) => s,
        }
    }
}

/// Owns the current scene and swaps it when a dispatch asks for another one.
pub struct SceneHost {
    content: Content,
    services: Services,
    current: CurrentScene,
}

impl SceneHost {
    /// Start on the splash screen.
    pub fn new(content: Content, services: Services) -> Self {
        let current = CurrentScene::Splash(Splash::new(&content.splash));
        Self { content, services, current }
    }

    pub fn current(&self) -> &CurrentScene {
        &self.current
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Replace the current scene wholesale.
    pub fn transition(&mut self, next: CurrentScene) {
        log::info!("scene {:?} -> {:?}", self.current.kind(), next.kind());
        self.current = next;
    }

    pub fn handle(&mut self, event: &InputEvent) -> Result<Signal> {
        if let InputEvent::Quit = event {
            log::info!("close requested");
            return Ok(Signal::Exit);
        }
        let mut ctx = SceneCtx::new(&self.services);
        self.current.as_scene_mut().handle(event, &mut ctx)?;
        let outcome = ctx.finish();
        Ok(self.settle(outcome))
    }

    pub fn update(&mut self, dt: f32) -> Result<Signal> {
        let mut ctx = SceneCtx::new(&self.services);
        self.current.as_scene_mut().update(dt, &mut ctx)?;
        let outcome = ctx.finish();
        Ok(self.settle(outcome))
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        self.current.as_scene().draw(canvas, &self.content.theme);
    }

    fn settle(&mut self, (transition, exit): (Option<Transition>, bool)) -> Signal {
        if exit {
            log::info!("exit requested from {:?}", self.current.kind());
            return Signal::Exit;
        }
        if let Some(transition) = transition {
            let next = self.build(transition);
            self.transition(next);
        }
        Signal::Continue
    }

    fn build(&self, transition: Transition) -> CurrentScene {
        let theme = &self.content.theme;
        match transition {
            Transition::Menu => CurrentScene::Menu(Menu::new(&self.content)),
            Transition::Detail(institution) => {
                log::debug!("showing {}", institution.name);
                CurrentScene::Detail(Detail::new(institution, theme))
            }
            Transition::Info(page) => CurrentScene::Info(InfoScreen::new(page, theme)),
        }
    }
}
