use std::sync::Arc;

use anyhow::Result;
use kiosk_core::{FontRole, HitRegion, Rect, RoundedRect};
use kiosk_surface::Canvas;

use crate::action::Action;
use crate::catalog::Institution;
use crate::elements::button::{Button, ButtonClickResult, draw_button_face};
use crate::elements::multiline_text::MultilineText;
use crate::scene::{PointerButton, SceneCtx};
use crate::theme::Theme;

pub const VIEW_MORE_LABEL: &str = "View more";

/// Menu card for one institution. The whole card is clickable; the inner
/// "View more" pill only highlights on hover.
#[derive(Clone, Debug)]
pub struct Card {
    institution: Arc<Institution>,
    button: Button,
    view_more: HitRegion,
    view_more_hover: bool,
}

impl Card {
    pub fn new(institution: Arc<Institution>, rect: Rect, theme: &Theme) -> Self {
        let cx = rect.center()[0];
        let view_more = HitRegion::new(cx - 80.0, rect.y + 260.0, 160.0, 44.0);
        let button = Button::new(
            institution.name.clone(),
            rect,
            Action::ShowDetail(institution.clone()),
            theme.button.clone(),
        );
        Self { institution, button, view_more, view_more_hover: false }
    }

    pub fn institution(&self) -> &Arc<Institution> {
        &self.institution
    }

    pub fn region(&self) -> HitRegion {
        self.button.region()
    }

    pub fn view_more_region(&self) -> HitRegion {
        self.view_more
    }

    pub fn view_more_hovered(&self) -> bool {
        self.view_more_hover
    }

    pub fn on_pointer_move(&mut self, pos: [f32; 2]) {
        self.button.on_pointer_move(pos);
        self.view_more_hover = self.view_more.contains(pos);
    }

    pub fn on_pointer_down(
        &self,
        pos: [f32; 2],
        button: PointerButton,
        ctx: &mut SceneCtx,
    ) -> Result<ButtonClickResult> {
        self.button.on_pointer_down(pos, button, ctx)
    }

    pub fn render(&self, canvas: &mut Canvas, theme: &Theme, z: i32) {
        let rect = self.region().rect();
        let cx = rect.center()[0];
        let panel = RoundedRect::new(rect, theme.panel_radius);
        canvas.fill_rounded_rect(panel, theme.panel_color, z);
        canvas.stroke_rounded_rect(panel, 2.0, theme.panel_border, z + 1);

        canvas.draw_image_centered(&self.institution.image, [cx, rect.y + 95.0], 255, z + 1);
        canvas.draw_text_centered(
            [cx, rect.y + 195.0],
            &self.institution.name,
            theme.body_size,
            FontRole::Regular,
            theme.label_color,
            z + 2,
        );
        MultilineText {
            pos: [rect.x + 16.0, rect.y + 210.0],
            text: &self.institution.area,
            size: theme.small_size,
            color: theme.area_color,
            max_width: rect.w - 32.0,
        }
        .render(canvas, z + 2);

        draw_button_face(
            canvas,
            self.view_more.rect(),
            VIEW_MORE_LABEL,
            &theme.view_more,
            self.view_more_hover,
            z + 3,
        );
    }
}
