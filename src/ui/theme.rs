use ratatui::style::Color;
use serde_json::{Map, Value};

pub const THEME_KEY: &str = "theme";

/// Light or dark colors for the form. Persisted as `"theme"` in `config.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Colors resolved from a [`Theme`].
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub field_bg: Color,
    pub field_fg: Color,
    pub accent: Color,
    pub muted: Color,
    pub highlight: Color,
    pub error: Color,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Read the theme from the extra keys of `config.json`, defaulting to light.
    pub fn from_extras(extras: &Map<String, Value>) -> Self {
        match extras.get(THEME_KEY).and_then(Value::as_str) {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn store_in(self, extras: &mut Map<String, Value>) {
        extras.insert(THEME_KEY.to_string(), Value::from(self.as_str()));
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                bg: Color::Rgb(0xf0, 0xf0, 0xf0),
                fg: Color::Black,
                field_bg: Color::White,
                field_fg: Color::Black,
                accent: Color::Blue,
                muted: Color::Gray,
                highlight: Color::Magenta,
                error: Color::Red,
            },
            Theme::Dark => Palette {
                bg: Color::Rgb(0x2e, 0x2e, 0x2e),
                fg: Color::White,
                field_bg: Color::Rgb(0x3e, 0x3e, 0x3e),
                field_fg: Color::White,
                accent: Color::Cyan,
                muted: Color::DarkGray,
                highlight: Color::Yellow,
                error: Color::LightRed,
            },
        }
    }
}
