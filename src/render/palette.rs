//! Category to terminal color mapping

use crate::classifier::Category;
use crate::config::PaletteSettings;
use crate::error::{ColorizerError, Result};
use crossterm::style::Color;

/// Resolved terminal colors for every category plus the banner and
/// interrupt notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    categories: [Color; 6],
    pub intro: Color,
    pub exiting: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            categories: [
                Color::Green,
                Color::Cyan,
                Color::White,
                Color::Red,
                Color::Magenta,
                Color::Yellow,
            ],
            intro: Color::White,
            exiting: Color::Magenta,
        }
    }
}

fn parse(key: &'static str, value: &str) -> Result<Color> {
    Color::try_from(value.trim()).map_err(|_| ColorizerError::InvalidColor {
        key,
        value: value.to_string(),
    })
}

impl Palette {
    /// Build from configured color names such as `red` or `dark_cyan`.
    pub fn from_settings(settings: &PaletteSettings) -> Result<Self> {
        Ok(Self {
            categories: [
                parse("info", &settings.info)?,
                parse("warning", &settings.warning)?,
                parse("debug", &settings.debug)?,
                parse("error", &settings.error)?,
                parse("nucleus", &settings.nucleus)?,
                parse("other", &settings.other)?,
            ],
            intro: parse("intro", &settings.intro)?,
            exiting: parse("exiting", &settings.exiting)?,
        })
    }

    pub fn color(&self, category: Category) -> Color {
        self.categories[category.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_match_default_palette() {
        let palette = Palette::from_settings(&PaletteSettings::default()).unwrap();
        assert_eq!(palette, Palette::default());
        assert_eq!(palette.color(Category::Error), Color::Red);
        assert_eq!(palette.color(Category::Other), Color::Yellow);
    }

    #[test]
    fn test_dark_variants() {
        let settings = PaletteSettings {
            error: "dark_red".to_string(),
            ..PaletteSettings::default()
        };
        let palette = Palette::from_settings(&settings).unwrap();
        assert_eq!(palette.color(Category::Error), Color::DarkRed);
    }

    #[test]
    fn test_unknown_color_names_key() {
        let settings = PaletteSettings {
            nucleus: "blurple".to_string(),
            ..PaletteSettings::default()
        };
        let err = Palette::from_settings(&settings).unwrap_err();
        assert!(matches!(
            err,
            ColorizerError::InvalidColor { key: "nucleus", .. }
        ));
    }
}
