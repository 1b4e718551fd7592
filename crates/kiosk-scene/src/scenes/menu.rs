use anyhow::Result;
use kiosk_core::{Rect, first_hit};
use kiosk_surface::Canvas;

use crate::action::Action;
use crate::catalog::Content;
use crate::elements::{Button, ButtonClickResult, Card};
use crate::scene::{InputEvent, Scene, SceneCtx};
use crate::theme::Theme;

use super::{BOTTOM_ROW_OFFSET, draw_title};

pub const MENU_TITLE: &str = "Choose an option to explore";
pub const ABOUT_LABEL: &str = "About";
pub const EXIT_LABEL: &str = "Exit";

const CARD_X: f32 = 60.0;
const CARD_Y: f32 = 130.0;
const CARD_W: f32 = 260.0;
const CARD_H: f32 = 300.0;
const CARD_GAP: f32 = 20.0;

const SIDE_PADDING: f32 = 60.0;
const BOTTOM_W: f32 = 240.0;
const BOTTOM_H: f32 = 60.0;

/// Card `index` of the menu, laid out left to right.
pub fn card_rect(index: usize) -> Rect {
    Rect::new(CARD_X + index as f32 * (CARD_W + CARD_GAP), CARD_Y, CARD_W, CARD_H)
}

/// Institution cards plus the "About" and "Exit" buttons.
#[derive(Clone, Debug)]
pub struct Menu {
    cards: Vec<Card>,
    buttons: Vec<Button>,
}

impl Menu {
    pub fn new(content: &Content) -> Self {
        let theme = &content.theme;
        let cards = content
            .catalog
            .iter()
            .enumerate()
            .map(|(i, institution)| Card::new(institution.clone(), card_rect(i), theme))
            .collect();

        let y = theme.height - BOTTOM_ROW_OFFSET;
        let buttons = vec![
            Button::new(
                ABOUT_LABEL,
                Rect::new(SIDE_PADDING, y, BOTTOM_W, BOTTOM_H),
                Action::ShowInfo(content.about.clone()),
                theme.button.clone(),
            ),
            Button::new(
                EXIT_LABEL,
                Rect::new(theme.width - SIDE_PADDING - BOTTOM_W, y, BOTTOM_W, BOTTOM_H),
                Action::Exit,
                theme.button.clone(),
            ),
        ];
        Self { cards, buttons }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn button(&self, label: &str) -> Option<&Button> {
        self.buttons.iter().find(|b| b.label() == label)
    }
}

impl Scene for Menu {
    fn handle(&mut self, event: &InputEvent, ctx: &mut SceneCtx) -> Result<()> {
        match *event {
            InputEvent::PointerMove { pos } => {
                for b in &mut self.buttons {
                    b.on_pointer_move(pos);
                }
                for card in &mut self.cards {
                    card.on_pointer_move(pos);
                }
            }
            InputEvent::PointerDown { pos, button } => {
                for b in &self.buttons {
                    if b.on_pointer_down(pos, button, ctx)? == ButtonClickResult::Clicked {
                        return Ok(());
                    }
                }
                if let Some(index) = first_hit(self.cards.iter().map(Card::region), pos) {
                    self.cards[index].on_pointer_down(pos, button, ctx)?;
                }
            }
            InputEvent::Quit => {}
        }
        Ok(())
    }

    fn draw(&self, canvas: &mut Canvas, theme: &Theme) {
        canvas.clear(theme.background);
        draw_title(canvas, theme, MENU_TITLE);
        for card in &self.cards {
            card.render(canvas, theme, 1);
        }
        for b in &self.buttons {
            b.render(canvas, 5);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, InfoPage, Institution, SplashContent};
    use crate::scene::{PointerButton, Transition};
    use crate::services::{Services, SilentFeedback, SystemOpener};
    use kiosk_core::{Color, FixedAdvance, Image, TextMeasure};

    fn institution(name: &str) -> Institution {
        Institution {
            name: name.into(),
            area: "Ingeniería en Inteligencia de Datos y Ciberseguridad".into(),
            summary: String::new(),
            url: format!("https://{}.mx/", name.to_lowercase()),
            image: Image::placeholder((160, 160), Color::rgb(60, 60, 80)),
        }
    }

    fn content() -> Content {
        Content {
            theme: Theme::default(),
            catalog: Catalog::new(vec![institution("A"), institution("B"), institution("C")]),
            about: InfoPage { title: "About".into(), body: "Body".into(), url: None },
            splash: SplashContent {
                title: String::new(),
                subtitle: String::new(),
                logo: Image::placeholder((1, 1), Color::rgb(0, 0, 0)),
                duration: 1.8,
            },
        }
    }

    fn click(menu: &mut Menu, services: &Services, pos: [f32; 2]) -> (Option<Transition>, bool) {
        let mut ctx = SceneCtx::new(services);
        menu.handle(&InputEvent::PointerDown { pos, button: PointerButton::Primary }, &mut ctx).unwrap();
        ctx.finish()
    }

    #[test]
    fn cards_are_laid_out_left_to_right() {
        let menu = Menu::new(&content());
        let xs: Vec<f32> = menu.cards().iter().map(|c| c.region().rect().x).collect();
        assert_eq!(xs, [60.0, 340.0, 620.0]);
        let vm = menu.cards()[0].view_more_region().rect();
        assert_eq!((vm.x, vm.y, vm.w, vm.h), (110.0, 390.0, 160.0, 44.0));
        assert_eq!(menu.button(EXIT_LABEL).unwrap().region().rect().x, 600.0);
    }

    #[test]
    fn card_click_requests_matching_detail() {
        let services = Services::new(Box::new(SilentFeedback), Box::new(SystemOpener));
        let mut menu = Menu::new(&content());
        let (t, exit) = click(&mut menu, &services, [470.0, 200.0]);
        assert!(!exit);
        match t {
            Some(Transition::Detail(inst)) => assert_eq!(inst.name, "B"),
            other => panic!("unexpected transition: {other:?}"),
        }
        // Gap between cards hits nothing.
        let (t, _) = click(&mut menu, &services, [330.0, 200.0]);
        assert!(t.is_none());
    }

    #[test]
    fn bottom_buttons_show_about_and_exit() {
        let services = Services::new(Box::new(SilentFeedback), Box::new(SystemOpener));
        let mut menu = Menu::new(&content());
        let (t, _) = click(&mut menu, &services, [100.0, 500.0]);
        assert!(matches!(t, Some(Transition::Info(ref page)) if page.url.is_none()));
        let (t, exit) = click(&mut menu, &services, [700.0, 500.0]);
        assert!(t.is_none());
        assert!(exit);
    }

    #[test]
    fn view_more_hover_is_event_driven() {
        let services = Services::new(Box::new(SilentFeedback), Box::new(SystemOpener));
        let mut menu = Menu::new(&content());
        let mut ctx = SceneCtx::new(&services);
        menu.handle(&InputEvent::PointerMove { pos: [190.0, 410.0] }, &mut ctx).unwrap();
        assert!(menu.cards()[0].view_more_hovered());
        assert!(!menu.cards()[1].view_more_hovered());
        menu.handle(&InputEvent::PointerMove { pos: [190.0, 200.0] }, &mut ctx).unwrap();
        assert!(!menu.cards()[0].view_more_hovered());
    }

    #[test]
    fn draw_lists_every_card() {
        let menu = Menu::new(&content());
        let theme = Theme::default();
        let metrics = FixedAdvance::default();
        let mut canvas = Canvas::new(theme.viewport(), &metrics);
        menu.draw(&mut canvas, &theme);
        let list = canvas.finish();
        assert!(list.contains_text(MENU_TITLE));
        for name in ["A", "B", "C"] {
            assert!(list.texts().any(|t| t.text == name));
        }
        assert_eq!(list.texts().filter(|t| t.text == "View more").count(), 3);
        assert_eq!(list.images().count(), 3);
        // Area labels stay inside the card's inner width.
        for run in list.texts().filter(|t| t.size == theme.small_size && t.text.ends_with(' ')) {
            assert!(metrics.advance(&run.text, run.size, run.role) < CARD_W - 32.0);
        }
    }
}
