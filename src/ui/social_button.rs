use crate::config::LinkConfig;
use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Destinations a social button knows an icon for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialIcon {
    GitHub,
    LinkedIn,
    Twitter,
    Email,
}

impl FromStr for SocialIcon {
    type Err = String;

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind {
            "github" => Ok(Self::GitHub),
            "linkedin" => Ok(Self::LinkedIn),
            "twitter" => Ok(Self::Twitter),
            "email" => Ok(Self::Email),
            other => Err(format!("unknown icon kind '{}'", other)),
        }
    }
}

/// Glyph family used to draw icons
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconSet {
    /// Plain unicode symbols that every terminal font has
    #[default]
    Unicode,
    /// Brand glyphs from a Nerd Font
    Nerd,
}

impl SocialIcon {
    pub fn glyph(&self, set: IconSet) -> &'static str {
        match (set, self) {
            (IconSet::Unicode, SocialIcon::GitHub) => "⎇",
            (IconSet::Unicode, SocialIcon::LinkedIn) => "▣",
            (IconSet::Unicode, SocialIcon::Twitter) => "✦",
            (IconSet::Unicode, SocialIcon::Email) => "✉",
            (IconSet::Nerd, SocialIcon::GitHub) => "\u{f09b}",
            (IconSet::Nerd, SocialIcon::LinkedIn) => "\u{f0e1}",
            (IconSet::Nerd, SocialIcon::Twitter) => "\u{f099}",
            (IconSet::Nerd, SocialIcon::Email) => "\u{f0e0}",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverState {
    Default,
    Hovered,
}

/// A link to one external profile, with its own hover state
#[derive(Debug, Clone)]
pub struct SocialButton {
    icon: Option<SocialIcon>,
    label: String,
    link: String,
    state: HoverState,
    area: Option<Rect>,
}

impl SocialButton {
    /// An unknown icon kind is not an error; the button just has no glyph
    pub fn new(icon: &str, label: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            icon: icon.parse().ok(),
            label: label.into(),
            link: link.into(),
            state: HoverState::Default,
            area: None,
        }
    }

    pub fn from_config(link: &LinkConfig) -> Self {
        Self::new(&link.icon, link.label.clone(), link.url.clone())
    }

    pub fn icon(&self) -> Option<SocialIcon> {
        self.icon
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn state(&self) -> HoverState {
        self.state
    }

    pub fn is_hovered(&self) -> bool {
        self.state == HoverState::Hovered
    }

    /// Where the button was last drawn, if it was visible
    pub fn area(&self) -> Option<Rect> {
        self.area
    }

    pub fn pointer_enter(&mut self) {
        self.state = HoverState::Hovered;
    }

    pub fn pointer_leave(&mut self) {
        self.state = HoverState::Default;
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.map_or(false, |area| {
            column >= area.x
                && column < area.x.saturating_add(area.width)
                && row >= area.y
                && row < area.y.saturating_add(area.height)
        })
    }

    /// Apply a pointer position; returns true if the hover state changed
    pub fn pointer_moved(&mut self, column: u16, row: u16) -> bool {
        match (self.contains(column, row), self.state) {
            (true, HoverState::Default) => {
                self.pointer_enter();
                true
            }
            (false, HoverState::Hovered) => {
                self.pointer_leave();
                true
            }
            _ => false,
        }
    }

    /// Text drawn inside the button: glyph, gap, label
    pub fn content(&self, icons: IconSet) -> Line<'static> {
        let mut spans = Vec::with_capacity(3);
        if let Some(icon) = self.icon {
            spans.push(Span::raw(icon.glyph(icons)));
            spans.push(Span::raw(" "));
        }
        if self.is_hovered() {
            // Nudge the label right while hovered.
            spans.push(Span::raw(" "));
        }
        spans.push(Span::raw(self.label.clone()));
        Line::from(spans)
    }

    /// Columns needed to draw the button in either hover state
    pub fn width(&self) -> u16 {
        let icon = if self.icon.is_some() { 2 } else { 0 };
        let label = self.label.chars().count() as u16;
        // borders + padding + hover nudge
        icon + label + 2 + 2 + 1
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme, icons: IconSet) {
        if area.width == 0 || area.height == 0 {
            self.area = None;
            return;
        }
        self.area = Some(area);

        let palette = &theme.palette;
        let (border, text, background) = if self.is_hovered() {
            (palette.border_focused, palette.text_primary, palette.hover_background)
        } else {
            (palette.border, palette.text_secondary, palette.surface_raised)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(background));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut style = Style::default().fg(text);
        if self.is_hovered() {
            style = style.add_modifier(Modifier::BOLD);
        }
        let content = Paragraph::new(self.content(icons))
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(content, inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_kinds() {
        assert_eq!("github".parse::<SocialIcon>(), Ok(SocialIcon::GitHub));
        assert_eq!("email".parse::<SocialIcon>(), Ok(SocialIcon::Email));
        assert!("GitHub".parse::<SocialIcon>().is_err());
        assert!("mastodon".parse::<SocialIcon>().is_err());
    }

    #[test]
    fn test_content_without_icon_is_label_only() {
        let button = SocialButton::new("mastodon", "Mastodon", "https://example.social/@me");
        assert!(button.icon().is_none());
        let text: String = button
            .content(IconSet::Unicode)
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();
        assert_eq!(text, "Mastodon");
    }

    #[test]
    fn test_pointer_hit_testing() {
        let mut button = SocialButton::new("github", "GitHub", "https://github.com");
        assert!(!button.pointer_moved(3, 3), "never drawn, never hit");

        button.area = Some(Rect::new(10, 5, 12, 3));
        assert!(button.contains(10, 5));
        assert!(button.contains(21, 7));
        assert!(!button.contains(22, 7));
        assert!(!button.contains(10, 8));

        assert!(button.pointer_moved(11, 6));
        assert!(button.is_hovered());
        assert!(!button.pointer_moved(12, 6));
        assert!(button.pointer_moved(0, 0));
        assert_eq!(button.state(), HoverState::Default);
    }
}
