use std::time::Duration;

use anyhow::{Context, Result};
use kiosk_config::KioskConfig;
use kiosk_core::{FontSet, ImageProvider, Viewport};
use kiosk_surface::{Canvas, SoftRenderer};
use kiosk_window::{ElementState, EventHandler, Frame, KioskWindow, MouseButton, WindowCtx, WindowSettings};

use crate::catalog::Content;
use crate::host::SceneHost;
use crate::scene::{InputEvent, PointerButton, Signal};
use crate::services::Services;

/// Bridges window callbacks to the scene host and rasterizes each frame.
pub struct KioskApp {
    host: SceneHost,
    fonts: FontSet,
    renderer: SoftRenderer,
    viewport: Viewport,
}

impl KioskApp {
    pub fn new(host: SceneHost, fonts: FontSet) -> Result<Self> {
        let viewport = host.content().theme.viewport();
        let renderer = SoftRenderer::new(viewport.width, viewport.height)?;
        Ok(Self { host, fonts, renderer, viewport })
    }

    pub fn host(&self) -> &SceneHost {
        &self.host
    }

    fn dispatch(&mut self, ctx: &mut WindowCtx, event: InputEvent) -> Result<()> {
        let signal = self.host.handle(&event)?;
        apply(signal, ctx);
        Ok(())
    }
}

fn apply(signal: Signal, ctx: &WindowCtx) {
    if signal == Signal::Exit {
        ctx.exit();
    }
}

fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
        _ => PointerButton::Other,
    }
}

impl EventHandler for KioskApp {
    fn init(&mut self, ctx: &mut WindowCtx) -> Result<()> {
        ctx.request_redraw();
        Ok(())
    }

    fn on_mouse_move(&mut self, ctx: &mut WindowCtx, pos: [f32; 2]) -> Result<()> {
        self.dispatch(ctx, InputEvent::PointerMove { pos })
    }

    fn on_mouse_input(&mut self, ctx: &mut WindowCtx, state: ElementState, button: MouseButton) -> Result<()> {
        if state != ElementState::Pressed {
            return Ok(());
        }
        let event = InputEvent::PointerDown { pos: ctx.mouse_pos(), button: pointer_button(button) };
        self.dispatch(ctx, event)
    }

    fn on_update(&mut self, ctx: &mut WindowCtx, dt: f32) -> Result<()> {
        let signal = self.host.update(dt)?;
        apply(signal, ctx);
        Ok(())
    }

    fn on_redraw(&mut self, _ctx: &mut WindowCtx, frame: Frame<'_>) -> Result<()> {
        let theme = &self.host.content().theme;
        let mut canvas = Canvas::new(self.viewport, &self.fonts);
        canvas.set_paragraph_padding(theme.line_padding, theme.paragraph_padding);
        self.host.draw(&mut canvas);
        let list = canvas.finish();

        self.renderer.render(&list, &self.fonts);
        self.renderer.copy_to_xrgb(frame.pixels, frame.width, frame.height);
        Ok(())
    }

    fn on_close_requested(&mut self, ctx: &mut WindowCtx) -> Result<()> {
        self.dispatch(ctx, InputEvent::Quit)
    }
}

/// Build the launcher from `config` and run it until it exits.
pub fn run(config: &KioskConfig) -> Result<()> {
    config.validate()?;

    let fonts = FontSet::load(config.text.font.as_deref(), config.text.bold_font.as_deref())
        .context("failed to load fonts")?;
    let mut images = ImageProvider::new(&config.assets.root);
    let content = Content::from_config(config, &mut images);
    let services = Services::from_config(config);
    let app = KioskApp::new(SceneHost::new(content, services), fonts)?;

    let window = KioskWindow::new(WindowSettings {
        title: config.window.title.clone(),
        width: config.window.width,
        height: config.window.height,
        fps: config.window.fps,
        failure_grace: Duration::from_secs_f32(config.failure.grace_secs.max(0.0)),
    })?;
    window.run(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_button_is_primary() {
        assert_eq!(pointer_button(MouseButton::Left), PointerButton::Primary);
        assert_eq!(pointer_button(MouseButton::Right), PointerButton::Secondary);
        assert_eq!(pointer_button(MouseButton::Back), PointerButton::Other);
    }
}
