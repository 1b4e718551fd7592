//! Controls and text blocks drawn through the kiosk-surface Canvas.

pub mod button;
pub mod card;
pub mod multiline_text;

pub use button::{Button, ButtonClickResult, draw_button_face};
pub use card::Card;
pub use multiline_text::MultilineText;
