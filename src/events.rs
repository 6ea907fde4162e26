use crate::ui::Page;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Result of handling a terminal event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    OpenLink(String),
    CycleTheme,
}

/// Translates terminal input into page actions
#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_event(&mut self, event: Event, page: &mut Page) -> EventResult {
        match event {
            Event::Key(key) => self.handle_key_event(key, page),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse, page),
            _ => EventResult::Continue,
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent, page: &mut Page) -> EventResult {
        if key.kind == KeyEventKind::Release {
            return EventResult::Continue;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                EventResult::Quit
            }
            KeyCode::Char('q') | KeyCode::Esc => EventResult::Quit,
            KeyCode::Char('t') => EventResult::CycleTheme,
            KeyCode::Tab => {
                page.focus_next();
                EventResult::Continue
            }
            KeyCode::BackTab => {
                page.focus_previous();
                EventResult::Continue
            }
            KeyCode::Enter => page
                .activate_focused()
                .map(EventResult::OpenLink)
                .unwrap_or(EventResult::Continue),
            _ => EventResult::Continue,
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent, page: &mut Page) -> EventResult {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                page.pointer_moved(mouse.column, mouse.row);
                EventResult::Continue
            }
            MouseEventKind::Down(MouseButton::Left) => page
                .pointer_pressed(mouse.column, mouse.row)
                .map(EventResult::OpenLink)
                .unwrap_or(EventResult::Continue),
            _ => EventResult::Continue,
        }
    }
}
