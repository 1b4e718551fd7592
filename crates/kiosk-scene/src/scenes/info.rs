use anyhow::Result;
use kiosk_core::Rect;
use kiosk_surface::Canvas;

use crate::action::Action;
use crate::catalog::InfoPage;
use crate::elements::{Button, ButtonClickResult, MultilineText};
use crate::scene::{InputEvent, Scene, SceneCtx};
use crate::theme::Theme;

use super::{BOTTOM_ROW_OFFSET, back_button, draw_title};

pub const OPEN_LINK_LABEL: &str = "Open link";

/// Static text page. The "Open link" button exists only when the page has
/// a URL.
#[derive(Clone, Debug)]
pub struct InfoScreen {
    page: InfoPage,
    back: Button,
    open: Option<Button>,
}

impl InfoScreen {
    pub fn new(page: InfoPage, theme: &Theme) -> Self {
        let open = page.url.as_ref().map(|url| {
            Button::new(
                OPEN_LINK_LABEL,
                Rect::new(theme.width - 260.0, theme.height - BOTTOM_ROW_OFFSET, 220.0, 56.0),
                Action::OpenLink(url.clone()),
                theme.button.clone(),
            )
        });
        Self { page, back: back_button(theme), open }
    }

    pub fn page(&self) -> &InfoPage {
        &self.page
    }

    pub fn back(&self) -> &Button {
        &self.back
    }

    pub fn open(&self) -> Option<&Button> {
        self.open.as_ref()
    }
}

impl Scene for InfoScreen {
    fn handle(&mut self, event: &InputEvent, ctx: &mut SceneCtx) -> Result<()> {
        if self.back.handle(event, ctx)? == ButtonClickResult::Clicked {
            return Ok(());
        }
        if let Some(open) = &mut self.open {
            open.handle(event, ctx)?;
        }
        Ok(())
    }

    fn draw(&self, canvas: &mut Canvas, theme: &Theme) {
        canvas.clear(theme.background);
        draw_title(canvas, theme, &self.page.title);
        MultilineText {
            pos: [70.0, 110.0],
            text: &self.page.body,
            size: theme.small_size,
            color: theme.body_color,
            max_width: theme.width - 140.0,
        }
        .render(canvas, 1);
        self.back.render(canvas, 5);
        if let Some(open) = &self.open {
            open.render(canvas, 5);
        }
    }
}
