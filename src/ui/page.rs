//! The landing page shell
//!
//! Owns the page's view state (progress, library and animation readiness),
//! lays out the three animation containers and the social buttons, and drives
//! the effect phase that runs after every draw.

use crate::animation::{
    AnimationError, AnimationFactory, AnimationLoader, AnimationSlot, ContainerRegistry,
    LibraryLoader, LoaderState,
};
use crate::config::{Config, PageCopy};
use crate::progress::ProgressTicker;
use crate::theme::Theme;
use crate::ui::social_button::{IconSet, SocialButton};
use crate::ui::widgets::{gradient_line, highlighted_line, AnimationView};
use chrono::{Datelike, Local};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Wrap},
    Frame,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Widest the page content grows on large terminals
const MAX_CONTENT_WIDTH: u16 = 96;
const MAX_BAR_WIDTH: u16 = 56;
const SPINNER_WIDTH: u16 = 3;
const BUTTON_HEIGHT: u16 = 3;

/// Outcome of the background library request
pub enum LibraryEvent {
    Loaded(Arc<dyn AnimationFactory>),
    Failed(AnimationError),
}

pub struct Page {
    copy: PageCopy,
    icons: IconSet,
    buttons: Vec<SocialButton>,
    ticker: ProgressTicker,
    loader: AnimationLoader,
    containers: ContainerRegistry,
    library_events: mpsc::UnboundedReceiver<LibraryEvent>,
    library_task: Option<JoinHandle<()>>,
    mounted: bool,
}

impl Page {
    /// Mount the page: start the ticker and request the animation library once
    ///
    /// Passing no loader leaves the page without animations. Must be called
    /// from within a tokio runtime.
    pub fn mount(config: &Config, library: Option<Arc<dyn LibraryLoader>>) -> Self {
        let (sender, library_events) = mpsc::unbounded_channel();

        let library_task = match library {
            Some(loader) => {
                tracing::info!("Requesting animation library from {}", loader.describe());
                Some(tokio::spawn(async move {
                    let event = match loader.load().await {
                        Ok(factory) => LibraryEvent::Loaded(factory),
                        Err(error) => LibraryEvent::Failed(error),
                    };
                    // The page may already be gone.
                    let _ = sender.send(event);
                }))
            }
            None => {
                tracing::info!("Animations disabled");
                None
            }
        };

        Self {
            copy: config.page.clone(),
            icons: config.theme.icons,
            buttons: config.links.iter().map(SocialButton::from_config).collect(),
            ticker: ProgressTicker::start(config.tick_period()),
            loader: AnimationLoader::new(config.animation_specs()),
            containers: ContainerRegistry::new(),
            library_events,
            library_task,
            mounted: true,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn progress(&self) -> u8 {
        self.ticker.progress()
    }

    pub fn script_loaded(&self) -> bool {
        self.loader.script_loaded()
    }

    pub fn animations_ready(&self) -> bool {
        self.loader.animations_ready()
    }

    pub fn loader_state(&self) -> &LoaderState {
        self.loader.state()
    }

    pub fn loader(&self) -> &AnimationLoader {
        &self.loader
    }

    pub fn containers(&self) -> &ContainerRegistry {
        &self.containers
    }

    pub fn buttons(&self) -> &[SocialButton] {
        &self.buttons
    }

    pub fn on_library_loaded(&mut self, factory: Arc<dyn AnimationFactory>) {
        self.loader.library_loaded(factory);
    }

    pub fn on_library_failed(&mut self, error: AnimationError) {
        self.loader.library_failed(&error);
    }

    fn apply_library_event(&mut self, event: LibraryEvent) {
        match event {
            LibraryEvent::Loaded(factory) => self.on_library_loaded(factory),
            LibraryEvent::Failed(error) => self.on_library_failed(error),
        }
    }

    /// Effect phase, run after each draw
    ///
    /// Returns true if this pass created the animation players.
    pub fn after_render(&mut self) -> bool {
        while let Ok(event) = self.library_events.try_recv() {
            self.apply_library_event(event);
        }
        self.loader.reconcile(&self.containers)
    }

    /// Wait for the library request to finish and apply its outcome
    ///
    /// Returns false if there is nothing left to wait for.
    pub async fn await_library(&mut self) -> bool {
        match self.library_events.recv().await {
            Some(event) => {
                self.apply_library_event(event);
                true
            }
            None => false,
        }
    }

    pub fn advance_animations(&mut self, delta: Duration) {
        self.loader.advance(delta);
    }

    /// Route a pointer move to every button; true if any hover state changed
    pub fn pointer_moved(&mut self, column: u16, row: u16) -> bool {
        let mut changed = false;
        for button in &mut self.buttons {
            changed |= button.pointer_moved(column, row);
        }
        changed
    }

    /// Link under the pointer, if any
    pub fn pointer_pressed(&self, column: u16, row: u16) -> Option<String> {
        self.buttons
            .iter()
            .find(|button| button.contains(column, row))
            .map(|button| button.link().to_string())
    }

    /// Move hover to the next button, wrapping around
    pub fn focus_next(&mut self) {
        self.move_focus(true);
    }

    pub fn focus_previous(&mut self) {
        self.move_focus(false);
    }

    fn move_focus(&mut self, forward: bool) {
        let count = self.buttons.len();
        if count == 0 {
            return;
        }
        let next = match (self.buttons.iter().position(SocialButton::is_hovered), forward) {
            (Some(current), true) => (current + 1) % count,
            (Some(current), false) => (current + count - 1) % count,
            (None, true) => 0,
            (None, false) => count - 1,
        };
        for button in &mut self.buttons {
            button.pointer_leave();
        }
        self.buttons[next].pointer_enter();
    }

    /// Link of the hovered button, if any
    pub fn activate_focused(&self) -> Option<String> {
        self.buttons
            .iter()
            .find(|button| button.is_hovered())
            .map(|button| button.link().to_string())
    }

    /// Tear the page down; safe to call more than once
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.ticker.stop();
        if let Some(task) = self.library_task.take() {
            task.abort();
        }
        self.containers.clear();
        tracing::info!("Page unmounted");
    }

    /// Render the whole page
    pub fn render(&mut self, frame: &mut Frame, theme: &Theme) {
        let area = frame.size();
        let palette = &theme.palette;
        frame.render_widget(
            Block::default().style(Style::default().bg(palette.background)),
            area,
        );

        let width = area.width.min(MAX_CONTENT_WIDTH);
        let column = Rect {
            x: area.x + (area.width - width) / 2,
            width,
            ..area
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(12),    // Hero panel
                Constraint::Length(1),  // Gap
                Constraint::Length(16), // Secondary panel
                Constraint::Length(1),  // Footer
            ])
            .split(column);

        self.render_hero(frame, chunks[0], theme);
        self.render_secondary(frame, chunks[2], theme);
        self.render_footer(frame, chunks[3], theme);
    }

    fn panel(theme: &Theme) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.palette.border))
            .style(Style::default().bg(theme.palette.surface))
    }

    fn render_hero(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let palette = &theme.palette;
        let block = Self::panel(theme);
        let inner = block.inner(area).inner(&Margin {
            vertical: 0,
            horizontal: 2,
        });
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Construction animation
                Constraint::Length(1), // Headline
                Constraint::Length(1),
                Constraint::Length(2), // Tagline
                Constraint::Length(1),
                Constraint::Length(1), // Progress bar
                Constraint::Length(1),
            ])
            .split(inner);

        self.render_container(
            frame,
            AnimationSlot::Construction,
            rows[0],
            Style::default().fg(palette.accent),
        );

        let headline = Paragraph::new(gradient_line(
            &self.copy.headline,
            &palette.gradient(),
            Modifier::BOLD,
        ));
        frame.render_widget(headline, rows[1]);

        let tagline = highlighted_line(
            &self.copy.tagline,
            &self.copy.highlight,
            Style::default().fg(palette.text_secondary),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(
            Paragraph::new(tagline)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            rows[3],
        );

        let bar_width = rows[5].width.min(MAX_BAR_WIDTH);
        let bar = Rect {
            x: rows[5].x + (rows[5].width - bar_width) / 2,
            width: bar_width,
            ..rows[5]
        };
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(palette.gradient_mid).bg(palette.track))
            .percent(u16::from(self.progress().min(100)))
            .label("")
            .use_unicode(true);
        frame.render_widget(gauge, bar);

        let spinner_width = SPINNER_WIDTH.min(bar.width);
        let spinner = Rect {
            x: bar.x + (bar.width - spinner_width) / 2,
            width: spinner_width,
            ..bar
        };
        self.render_container(
            frame,
            AnimationSlot::Loading,
            spinner,
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        );
    }

    fn render_secondary(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let palette = &theme.palette;
        let block = Self::panel(theme);
        let inner = block.inner(area).inner(&Margin {
            vertical: 0,
            horizontal: 1,
        });
        frame.render_widget(block, area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(50), // Code animation
                Constraint::Length(2),
                Constraint::Min(0), // Coming soon + links
            ])
            .split(inner);

        self.render_container(
            frame,
            AnimationSlot::Code,
            columns[0],
            Style::default().fg(palette.heading),
        );

        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // Coming soon card
                Constraint::Length(1),
                Constraint::Length(1), // Connect heading
                Constraint::Min(0),    // Buttons
            ])
            .split(columns[2]);

        let card = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.surface_raised));
        let card_inner = card.inner(sections[0]).inner(&Margin {
            vertical: 0,
            horizontal: 1,
        });
        frame.render_widget(card, sections[0]);
        let card_text = Paragraph::new(vec![
            Line::styled(
                self.copy.coming_soon_title.clone(),
                Style::default()
                    .fg(palette.heading)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                self.copy.coming_soon_body.clone(),
                Style::default().fg(palette.text_secondary),
            ),
        ])
        .wrap(Wrap { trim: true });
        frame.render_widget(card_text, card_inner);

        let heading = Paragraph::new(Line::styled(
            self.copy.connect_heading.to_uppercase(),
            Style::default()
                .fg(palette.text_muted)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(heading, sections[2]);

        self.render_buttons(frame, sections[3], theme);
    }

    fn render_buttons(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let widths: Vec<u16> = self.buttons.iter().map(SocialButton::width).collect();
        let cells = wrap_buttons(&widths, area);
        let icons = self.icons;
        for (button, cell) in self.buttons.iter_mut().zip(cells) {
            button.render(frame, cell, theme, icons);
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let footer = Paragraph::new(format!("© {} • {}", Local::now().year(), self.copy.footer))
            .style(Style::default().fg(theme.palette.text_muted))
            .alignment(Alignment::Center);
        frame.render_widget(footer, area);
    }

    /// Lay out a container and draw its player, if one is bound yet
    fn render_container(&mut self, frame: &mut Frame, slot: AnimationSlot, area: Rect, style: Style) {
        self.containers.mount(slot, area);
        if let Some(player) = self.loader.player(slot) {
            frame.render_widget(AnimationView::new(player).style(style), area);
        }
    }
}

/// Place buttons left to right, wrapping onto new rows like flex-wrap
///
/// Buttons that don't fit vertically get an empty area and stay hidden.
pub fn wrap_buttons(widths: &[u16], area: Rect) -> Vec<Rect> {
    let right = area.x.saturating_add(area.width);
    let bottom = area.y.saturating_add(area.height);
    let mut x = area.x;
    let mut y = area.y;

    widths
        .iter()
        .map(|&width| {
            let width = width.min(area.width);
            if x > area.x && x.saturating_add(width) > right {
                x = area.x;
                y = y.saturating_add(BUTTON_HEIGHT);
            }
            if width == 0 || y.saturating_add(BUTTON_HEIGHT) > bottom {
                return Rect::default();
            }
            let cell = Rect::new(x, y, width, BUTTON_HEIGHT);
            x = x.saturating_add(width + 1);
            cell
        })
        .collect()
}

impl Drop for Page {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_buttons_flows_onto_next_row() {
        let cells = wrap_buttons(&[10, 10, 10], Rect::new(5, 2, 22, 6));
        assert_eq!(cells[0], Rect::new(5, 2, 10, 3));
        assert_eq!(cells[1], Rect::new(16, 2, 10, 3));
        assert_eq!(cells[2], Rect::new(5, 5, 10, 3));
    }

    #[test]
    fn test_wrap_buttons_hides_rows_that_do_not_fit() {
        let cells = wrap_buttons(&[10, 10], Rect::new(0, 0, 12, 4));
        assert_eq!(cells[0], Rect::new(0, 0, 10, 3));
        assert_eq!(cells[1], Rect::default());
    }

    #[test]
    fn test_wrap_buttons_clamps_to_area_width() {
        let cells = wrap_buttons(&[40], Rect::new(0, 0, 12, 3));
        assert_eq!(cells[0], Rect::new(0, 0, 12, 3));
    }
}
