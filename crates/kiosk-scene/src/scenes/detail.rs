use std::sync::Arc;

use anyhow::Result;
use kiosk_core::{Rect, RoundedRect};
use kiosk_surface::Canvas;

use crate::action::Action;
use crate::catalog::Institution;
use crate::elements::{Button, ButtonClickResult, MultilineText};
use crate::scene::{InputEvent, Scene, SceneCtx};
use crate::theme::Theme;

use super::{BOTTOM_ROW_OFFSET, back_button, draw_title};

pub const OPEN_SITE_LABEL: &str = "Open official site";

/// Full description of one institution with a link to its site.
#[derive(Clone, Debug)]
pub struct Detail {
    institution: Arc<Institution>,
    back: Button,
    open: Button,
}

impl Detail {
    pub fn new(institution: Arc<Institution>, theme: &Theme) -> Self {
        let open = Button::new(
            OPEN_SITE_LABEL,
            Rect::new(theme.width - 280.0, theme.height - BOTTOM_ROW_OFFSET, 240.0, 56.0),
            Action::OpenLink(institution.url.clone()),
            theme.button.clone(),
        );
        Self { institution, back: back_button(theme), open }
    }

    pub fn institution(&self) -> &Arc<Institution> {
        &self.institution
    }

    pub fn back(&self) -> &Button {
        &self.back
    }

    pub fn open(&self) -> &Button {
        &self.open
    }

    pub fn title(&self) -> String {
        format!("{} - {}", self.institution.name, self.institution.area)
    }

    pub fn body(&self) -> String {
        format!(
            "Summary: {}\n\nOfficial site: {}\nTip: look into scholarships, admission requirements and career prospects.",
            self.institution.summary, self.institution.url
        )
    }
}

impl Scene for Detail {
    fn handle(&mut self, event: &InputEvent, ctx: &mut SceneCtx) -> Result<()> {
        if self.back.handle(event, ctx)? == ButtonClickResult::Clicked {
            return Ok(());
        }
        self.open.handle(event, ctx)?;
        Ok(())
    }

    fn draw(&self, canvas: &mut Canvas, theme: &Theme) {
        canvas.clear(theme.background);
        draw_title(canvas, theme, &self.title());

        let card = Rect::new(60.0, 90.0, theme.width - 120.0, 360.0);
        let panel = RoundedRect::new(card, theme.panel_radius);
        canvas.fill_rounded_rect(panel, theme.panel_color, 1);
        canvas.stroke_rounded_rect(panel, 2.0, theme.panel_border, 2);

        let image = canvas.draw_image_centered(
            &self.institution.image,
            [card.x + 140.0, card.center()[1]],
            255,
            2,
        );
        MultilineText {
            pos: [image.right() + 30.0, card.y + 30.0],
            text: &self.body(),
            size: theme.small_size,
            color: theme.body_color,
            max_width: theme.width - 120.0 - 220.0 - 160.0,
        }
        .render(canvas, 3);

        self.back.render(canvas, 5);
        self.open.render(canvas, 5);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::scene::{PointerButton, Transition};
    use crate::services::{LinkOpener, Services, SilentFeedback};
    use kiosk_core::{Color, FixedAdvance, Image};

    struct RecordingOpener(Rc<RefCell<Vec<String>>>);

    impl LinkOpener for RecordingOpener {
        fn open(&self, url: &str) -> Result<()> {
            self.0.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    struct BrokenOpener;

    impl LinkOpener for BrokenOpener {
        fn open(&self, url: &str) -> Result<()> {
            anyhow::bail!("cannot open {url}")
        }
    }

    fn detail() -> Detail {
        let inst = Institution {
            name: "UP".into(),
            area: "Ingeniería en Inteligencia de Datos y Ciberseguridad".into(),
            summary: "Programas de alta calidad.".into(),
            url: "https://www.up.edu.mx/".into(),
            image: Image::placeholder((160, 160), Color::rgb(60, 60, 80)),
        };
        Detail::new(Arc::new(inst), &Theme::default())
    }

    fn press(pos: [f32; 2]) -> InputEvent {
        InputEvent::PointerDown { pos, button: PointerButton::Primary }
    }

    #[test]
    fn open_site_keeps_scene_and_opens_url() {
        let opened = Rc::new(RefCell::new(Vec::new()));
        let services = Services::new(Box::new(SilentFeedback), Box::new(RecordingOpener(opened.clone())));
        let mut d = detail();

        let mut ctx = SceneCtx::new(&services);
        d.handle(&press([700.0, 500.0]), &mut ctx).unwrap();
        assert!(ctx.transition().is_none());
        assert_eq!(*opened.borrow(), ["https://www.up.edu.mx/"]);
    }

    #[test]
    fn back_requests_menu() {
        let services = Services::new(Box::new(SilentFeedback), Box::new(BrokenOpener));
        let mut d = detail();
        let mut ctx = SceneCtx::new(&services);
        d.handle(&press([140.0, 508.0]), &mut ctx).unwrap();
        assert!(matches!(ctx.transition(), Some(Transition::Menu)));
    }

    #[test]
    fn opener_failure_propagates() {
        let services = Services::new(Box::new(SilentFeedback), Box::new(BrokenOpener));
        let mut d = detail();
        let mut ctx = SceneCtx::new(&services);
        let err = d.handle(&press([700.0, 500.0]), &mut ctx).unwrap_err();
        assert!(err.to_string().contains("https://www.up.edu.mx/"));
    }

    #[test]
    fn draw_shows_title_body_and_image_left_of_text() {
        let d = detail();
        let theme = Theme::default();
        let metrics = FixedAdvance::default();
        let mut canvas = Canvas::new(theme.viewport(), &metrics);
        d.draw(&mut canvas, &theme);
        let list = canvas.finish();

        assert!(list.contains_text("UP - Ingeniería en Inteligencia de Datos y Ciberseguridad"));
        assert!(list.contains_text("Official site: "));
        let (_, origin, _) = list.images().next().unwrap();
        // Centered on (200, 270).
        assert_eq!(origin, [120.0, 190.0]);
        let body_x = 120.0 + 160.0 + 30.0;
        assert!(list.texts().any(|t| t.pos == [body_x, 120.0] && t.text.starts_with("Summary:")));
    }
}
