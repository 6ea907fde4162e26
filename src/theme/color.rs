use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Colors used by the landing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorPalette {
    // Base colors
    pub background: Color,
    pub surface: Color,
    pub surface_raised: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub track: Color,

    // Special purpose colors
    pub accent: Color,
    pub heading: Color,
    pub hover_background: Color,

    // Gradient stops, left to right
    pub gradient_start: Color,
    pub gradient_mid: Color,
    pub gradient_end: Color,
}

impl ColorPalette {
    /// Gray, blue and purple on near-black
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(17, 24, 39),
            surface: Color::Rgb(22, 30, 46),
            surface_raised: Color::Rgb(31, 41, 55),

            text_primary: Color::Rgb(255, 255, 255),
            text_secondary: Color::Rgb(209, 213, 219),
            text_muted: Color::Rgb(107, 114, 128),

            border: Color::Rgb(55, 65, 81),
            border_focused: Color::Rgb(147, 51, 234),
            track: Color::Rgb(31, 41, 55),

            accent: Color::Rgb(96, 165, 250),
            heading: Color::Rgb(147, 197, 253),
            hover_background: Color::Rgb(37, 99, 235),

            gradient_start: Color::Rgb(96, 165, 250),
            gradient_mid: Color::Rgb(168, 85, 247),
            gradient_end: Color::Rgb(96, 165, 250),
        }
    }

    pub fn gruvbox_dark() -> Self {
        Self {
            background: Color::Rgb(29, 32, 33),
            surface: Color::Rgb(40, 40, 40),
            surface_raised: Color::Rgb(60, 56, 54),

            text_primary: Color::Rgb(251, 241, 199),
            text_secondary: Color::Rgb(213, 196, 161),
            text_muted: Color::Rgb(146, 131, 116),

            border: Color::Rgb(80, 73, 69),
            border_focused: Color::Rgb(250, 189, 47),
            track: Color::Rgb(60, 56, 54),

            accent: Color::Rgb(131, 165, 152),
            heading: Color::Rgb(142, 192, 124),
            hover_background: Color::Rgb(69, 133, 136),

            gradient_start: Color::Rgb(250, 189, 47),
            gradient_mid: Color::Rgb(254, 128, 25),
            gradient_end: Color::Rgb(251, 73, 52),
        }
    }

    /// Named colors only, for terminals without truecolor
    pub fn high_contrast() -> Self {
        Self {
            background: Color::Black,
            surface: Color::Black,
            surface_raised: Color::Black,

            text_primary: Color::White,
            text_secondary: Color::White,
            text_muted: Color::Gray,

            border: Color::White,
            border_focused: Color::Yellow,
            track: Color::DarkGray,

            accent: Color::Cyan,
            heading: Color::Yellow,
            hover_background: Color::Blue,

            gradient_start: Color::Cyan,
            gradient_mid: Color::Magenta,
            gradient_end: Color::Cyan,
        }
    }

    pub fn gradient(&self) -> [Color; 3] {
        [self.gradient_start, self.gradient_mid, self.gradient_end]
    }
}

/// Color at `position` (0.0 to 1.0) along evenly spaced gradient stops
///
/// Stops that are not RGB cannot be blended; the nearest stop is used instead.
pub fn gradient_at(stops: &[Color], position: f32) -> Color {
    match stops {
        [] => Color::Reset,
        [only] => *only,
        _ => {
            let position = position.clamp(0.0, 1.0);
            let scaled = position * (stops.len() - 1) as f32;
            let index = (scaled.floor() as usize).min(stops.len() - 2);
            let local = scaled - index as f32;
            lerp(stops[index], stops[index + 1], local)
        }
    }
}

fn lerp(from: Color, to: Color, t: f32) -> Color {
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}
