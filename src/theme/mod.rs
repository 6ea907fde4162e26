pub mod color;

use serde::{Deserialize, Serialize};

pub use color::{gradient_at, ColorPalette};

/// Main theme structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub palette: ColorPalette,
}

impl Theme {
    /// Dark gray glass panels with a blue/purple gradient
    pub fn midnight() -> Self {
        Self {
            name: "midnight".to_string(),
            description: "Dark gray panels with a blue and purple gradient".to_string(),
            palette: ColorPalette::midnight(),
        }
    }

    pub fn gruvbox_dark() -> Self {
        Self {
            name: "gruvbox-dark".to_string(),
            description: "Retro groove dark theme with warm, earthy colors".to_string(),
            palette: ColorPalette::gruvbox_dark(),
        }
    }

    /// Create a high contrast theme for accessibility
    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast".to_string(),
            description: "High contrast theme using the terminal's named colors".to_string(),
            palette: ColorPalette::high_contrast(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::midnight()
    }
}

/// Holds the available themes and which one is active
#[derive(Debug)]
pub struct ThemeManager {
    themes: Vec<Theme>,
    current: usize,
}

impl ThemeManager {
    pub fn new() -> Self {
        Self {
            themes: vec![Theme::midnight(), Theme::gruvbox_dark(), Theme::high_contrast()],
            current: 0,
        }
    }

    pub fn current_theme(&self) -> &Theme {
        &self.themes[self.current]
    }

    /// Switch to a different theme
    pub fn set_theme(&mut self, theme_name: &str) -> Result<(), String> {
        match self
            .themes
            .iter()
            .position(|t| t.name.eq_ignore_ascii_case(theme_name))
        {
            Some(index) => {
                self.current = index;
                Ok(())
            }
            None => Err(format!(
                "Theme '{}' not found (available: {})",
                theme_name,
                self.available_themes().join(", ")
            )),
        }
    }

    /// Activate the next theme, wrapping around
    pub fn cycle(&mut self) -> &Theme {
        self.current = (self.current + 1) % self.themes.len();
        tracing::debug!("Switched to theme {}", self.themes[self.current].name);
        self.current_theme()
    }

    pub fn available_themes(&self) -> Vec<&str> {
        self.themes.iter().map(|t| t.name.as_str()).collect()
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}
