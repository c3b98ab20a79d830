use ratatui::style::Color;
use serde_derive::Deserialize;
use serde_derive::Serialize;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(&self) -> ThemeMode {
        match self {
            ThemeMode::Light => return ThemeMode::Dark,
            ThemeMode::Dark => return ThemeMode::Light,
        }
    }

    /// Name of the bundled syntect theme used for highlighting output.
    pub fn syntax_theme(&self) -> &'static str {
        match self {
            ThemeMode::Light => return "base16-ocean.light",
            ThemeMode::Dark => return "base16-ocean.dark",
        }
    }

    pub fn background(&self) -> Color {
        match self {
            ThemeMode::Light => return Color::Rgb(239, 241, 245),
            ThemeMode::Dark => return Color::Rgb(43, 48, 59),
        }
    }

    pub fn foreground(&self) -> Color {
        match self {
            ThemeMode::Light => return Color::Rgb(43, 48, 59),
            ThemeMode::Dark => return Color::Rgb(239, 241, 245),
        }
    }

    pub fn accent(&self) -> Color {
        match self {
            ThemeMode::Light => return Color::Rgb(79, 70, 229),
            ThemeMode::Dark => return Color::Rgb(129, 140, 248),
        }
    }
}
