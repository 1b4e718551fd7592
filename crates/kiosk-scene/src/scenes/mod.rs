//! The four launcher screens.

mod detail;
mod info;
mod menu;
mod splash;

pub use detail::Detail;
pub use info::InfoScreen;
pub use menu::Menu;
pub use splash::Splash;

use kiosk_core::{FontRole, Rect};
use kiosk_surface::Canvas;

use crate::action::Action;
use crate::elements::Button;
use crate::theme::Theme;

/// Vertical center of the screen title.
const TITLE_Y: f32 = 42.0;
/// Distance from the bottom edge to the top of the bottom button row.
const BOTTOM_ROW_OFFSET: f32 = 80.0;

pub(crate) const BACK_LABEL: &str = "Back";

/// "Back" button shared by every screen except the menu.
fn back_button(theme: &Theme) -> Button {
    Button::new(
        BACK_LABEL,
        Rect::new(40.0, theme.height - BOTTOM_ROW_OFFSET, 200.0, 56.0),
        Action::ShowMenu,
        theme.button.clone(),
    )
}

fn draw_title(canvas: &mut Canvas, theme: &Theme, title: &str) {
    canvas.draw_text_centered(
        [theme.width * 0.5, TITLE_Y],
        title,
        theme.title_size,
        FontRole::Bold,
        theme.title_color,
        10,
    );
}
