use crate::animation::AnimationPlayer;
use crate::theme::gradient_at;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Draws the current frame of a player centered in its container
pub struct AnimationView<'a> {
    player: &'a AnimationPlayer,
    style: Style,
}

impl<'a> AnimationView<'a> {
    pub fn new(player: &'a AnimationPlayer) -> Self {
        Self {
            player,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for AnimationView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.player.frame_lines();
        if area.width == 0 || area.height == 0 || lines.is_empty() {
            return;
        }

        let (width, height) = self.player.size();
        let height = height.min(area.height);
        let width = width.min(area.width);
        let target = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        };

        // Pad to the animation's bounding box so frames don't jitter.
        let text: Vec<Line> = lines
            .iter()
            .take(height as usize)
            .map(|line| Line::from(format!("{:<width$}", line, width = width as usize)))
            .collect();
        Paragraph::new(text).style(self.style).render(target, buf);
    }
}

/// Text colored left to right across the gradient stops
pub fn gradient_line(text: &str, stops: &[Color], modifier: Modifier) -> Line<'static> {
    let count = text.chars().count();
    let spans: Vec<Span> = text
        .chars()
        .enumerate()
        .map(|(index, ch)| {
            let position = if count > 1 {
                index as f32 / (count - 1) as f32
            } else {
                0.0
            };
            Span::styled(
                ch.to_string(),
                Style::default()
                    .fg(gradient_at(stops, position))
                    .add_modifier(modifier),
            )
        })
        .collect();
    Line::from(spans).alignment(Alignment::Center)
}

/// Splits `text` around the first occurrence of `highlight`
pub fn highlighted_line(
    text: &str,
    highlight: &str,
    base: Style,
    emphasis: Style,
) -> Line<'static> {
    let found = if highlight.is_empty() {
        None
    } else {
        text.find(highlight)
    };

    match found {
        Some(start) => {
            let end = start + highlight.len();
            Line::from(vec![
                Span::styled(text[..start].to_string(), base),
                Span::styled(text[start..end].to_string(), emphasis),
                Span::styled(text[end..].to_string(), base),
            ])
        }
        None => Line::from(Span::styled(text.to_string(), base)),
    }
}
