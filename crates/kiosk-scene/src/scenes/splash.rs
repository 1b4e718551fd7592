use anyhow::Result;
use kiosk_core::{FontRole, Image};
use kiosk_surface::Canvas;

use crate::action::Action;
use crate::catalog::SplashContent;
use crate::scene::{InputEvent, Scene, SceneCtx};
use crate::theme::Theme;

/// Title, fading logo and a loading line. Requests the menu once
/// `duration` seconds of frame time have accumulated.
#[derive(Clone, Debug)]
pub struct Splash {
    title: String,
    subtitle: String,
    logo: Image,
    duration: f32,
    elapsed: f32,
    fired: bool,
}

impl Splash {
    pub fn new(content: &SplashContent) -> Self {
        Self {
            title: content.title.clone(),
            subtitle: content.subtitle.clone(),
            logo: content.logo.clone(),
            duration: content.duration,
            elapsed: 0.0,
            fired: false,
        }
    }

    /// Logo opacity: linear from 0 to 255 over `duration`.
    pub fn logo_opacity(&self) -> u8 {
        if self.duration <= 0.0 {
            return 255;
        }
        (255.0 * self.elapsed / self.duration).clamp(0.0, 255.0) as u8
    }
}

impl Scene for Splash {
    fn handle(&mut self, _event: &InputEvent, _ctx: &mut SceneCtx) -> Result<()> {
        Ok(())
    }

    fn update(&mut self, dt: f32, ctx: &mut SceneCtx) -> Result<()> {
        self.elapsed += dt.max(0.0);
        if !self.fired && self.elapsed >= self.duration {
            self.fired = true;
            ctx.dispatch(&Action::ShowMenu)?;
        }
        Ok(())
    }

    fn draw(&self, canvas: &mut Canvas, theme: &Theme) {
        canvas.clear(theme.background);
        canvas.draw_text_centered(
            [theme.width * 0.5, 70.0],
            &self.title,
            theme.title_size,
            FontRole::Bold,
            theme.splash_title_color,
            1,
        );
        canvas.draw_image_centered(
            &self.logo,
            [theme.width * 0.5, theme.height * 0.5],
            self.logo_opacity(),
            1,
        );
        canvas.draw_text_centered(
            [theme.width * 0.5, theme.height - 40.0],
            &self.subtitle,
            theme.small_size,
            FontRole::Regular,
            theme.subtitle_color,
            1,
        );
    }
}
