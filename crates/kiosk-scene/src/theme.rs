use kiosk_config::KioskConfig;
use kiosk_core::{Color, Viewport};

/// Visual parameters of a clickable control.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonStyle {
    pub bg: Color,
    pub bg_hover: Color,
    pub fg: Color,
    pub border: Option<Color>,
    pub border_width: f32,
    pub radius: f32,
    pub label_size: f32,
}

impl ButtonStyle {
    /// Bordered button used for navigation.
    pub fn primary(label_size: f32) -> Self {
        Self {
            bg: Color::rgb(45, 45, 60),
            bg_hover: Color::rgb(70, 70, 100),
            fg: Color::rgb(240, 240, 250),
            border: Some(Color::rgb(90, 90, 130)),
            border_width: 2.0,
            radius: 12.0,
            label_size,
        }
    }

    /// Borderless pill drawn inside menu cards.
    pub fn pill(label_size: f32) -> Self {
        Self {
            bg: Color::rgb(50, 50, 85),
            bg_hover: Color::rgb(70, 70, 110),
            fg: Color::rgb(240, 240, 250),
            border: None,
            border_width: 0.0,
            radius: 10.0,
            label_size,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub width: f32,
    pub height: f32,
    pub background: Color,

    pub body_size: f32,
    pub small_size: f32,
    pub title_size: f32,
    pub line_padding: f32,
    pub paragraph_padding: f32,

    pub title_color: Color,
    pub splash_title_color: Color,
    pub subtitle_color: Color,
    pub body_color: Color,
    pub area_color: Color,
    pub label_color: Color,

    pub panel_color: Color,
    pub panel_border: Color,
    pub panel_radius: f32,

    pub button: ButtonStyle,
    pub view_more: ButtonStyle,
}

impl Theme {
    pub fn from_config(config: &KioskConfig) -> Self {
        let text = &config.text;
        Self {
            width: config.window.width as f32,
            height: config.window.height as f32,
            background: Color::from_rgb_array(config.window.background),
            body_size: text.body_size,
            small_size: text.small_size,
            title_size: text.title_size,
            line_padding: text.line_padding,
            paragraph_padding: text.paragraph_padding,
            title_color: Color::rgb(235, 235, 245),
            splash_title_color: Color::rgb(230, 230, 245),
            subtitle_color: Color::rgb(190, 190, 210),
            body_color: Color::rgb(220, 220, 235),
            area_color: Color::rgb(200, 200, 220),
            label_color: Color::rgb(240, 240, 250),
            panel_color: Color::rgb(34, 34, 46),
            panel_border: Color::rgb(90, 90, 130),
            panel_radius: 16.0,
            button: ButtonStyle::primary(text.body_size),
            view_more: ButtonStyle::pill(text.small_size),
        }
    }

    pub fn viewport(&self) -> Viewport {
        Viewport { width: self.width as u32, height: self.height as u32 }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&KioskConfig::default())
    }
}
