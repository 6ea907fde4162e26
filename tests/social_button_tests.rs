use buildsite::config::{Config, LinkConfig};
use buildsite::events::{EventHandler, EventResult};
use buildsite::theme::Theme;
use buildsite::ui::{HoverState, IconSet, Page, SocialButton, SocialIcon};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::TestBackend, Terminal};

fn rendered_page(config: &Config) -> (Page, Terminal<TestBackend>) {
    let mut page = Page::mount(config, None);
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    redraw(&mut terminal, &mut page);
    (page, terminal)
}

fn redraw(terminal: &mut Terminal<TestBackend>, page: &mut Page) {
    let theme = Theme::midnight();
    terminal.draw(|f| page.render(f, &theme)).unwrap();
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer.get(x, y).symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn hovered(page: &Page) -> Vec<bool> {
    page.buttons().iter().map(SocialButton::is_hovered).collect()
}

#[test]
fn test_icon_glyphs() {
    assert_eq!(SocialIcon::GitHub.glyph(IconSet::Unicode), "⎇");
    assert_eq!(SocialIcon::LinkedIn.glyph(IconSet::Unicode), "▣");
    assert_eq!(SocialIcon::Twitter.glyph(IconSet::Unicode), "✦");
    assert_eq!(SocialIcon::Email.glyph(IconSet::Unicode), "✉");
    assert_eq!(SocialIcon::GitHub.glyph(IconSet::Nerd), "\u{f09b}");
}

#[test]
fn test_buttons_follow_configured_links() {
    let config = Config::default();
    let buttons: Vec<SocialButton> = config.links.iter().map(SocialButton::from_config).collect();

    let icons: Vec<_> = buttons.iter().map(|b| b.icon()).collect();
    assert_eq!(
        icons,
        vec![
            Some(SocialIcon::GitHub),
            Some(SocialIcon::LinkedIn),
            Some(SocialIcon::Twitter),
            Some(SocialIcon::Email)
        ]
    );
    assert_eq!(buttons[0].link(), "https://github.com/ManikantaPotnuru9176");
    assert_eq!(buttons[3].link(), "mailto:manikantapotnuru9176@gmail.com");
    assert!(buttons.iter().all(|b| b.state() == HoverState::Default));
}

#[tokio::test]
async fn test_all_buttons_render_with_glyphs() {
    let (page, terminal) = rendered_page(&Config::default());
    let text = screen_text(&terminal);

    assert!(text.contains("⎇ GitHub"));
    assert!(text.contains("▣ LinkedIn"));
    assert!(text.contains("✦ Twitter"));
    assert!(text.contains("✉ Email"));
    assert!(page.buttons().iter().all(|b| b.area().is_some()));
}

#[tokio::test]
async fn test_hover_is_per_button() {
    let (mut page, mut terminal) = rendered_page(&Config::default());
    let mut handler = EventHandler::new();

    let first = page.buttons()[0].area().unwrap();
    let second = page.buttons()[1].area().unwrap();

    let result = handler.handle_event(mouse(MouseEventKind::Moved, first.x + 1, first.y + 1), &mut page);
    assert_eq!(result, EventResult::Continue);
    assert_eq!(hovered(&page), vec![true, false, false, false]);

    redraw(&mut terminal, &mut page);
    let text = screen_text(&terminal);
    assert!(text.contains("⎇  GitHub"), "hovered label is nudged right");
    assert!(text.contains("▣ LinkedIn"));

    handler.handle_event(mouse(MouseEventKind::Moved, second.x + 2, second.y + 1), &mut page);
    assert_eq!(hovered(&page), vec![false, true, false, false]);

    handler.handle_event(mouse(MouseEventKind::Moved, 0, 0), &mut page);
    assert_eq!(hovered(&page), vec![false, false, false, false]);

    redraw(&mut terminal, &mut page);
    assert!(screen_text(&terminal).contains("⎇ GitHub"));
}

#[tokio::test]
async fn test_click_opens_link() {
    let (mut page, _terminal) = rendered_page(&Config::default());
    let mut handler = EventHandler::new();

    let twitter = page.buttons()[2].area().unwrap();
    let result = handler.handle_event(
        mouse(MouseEventKind::Down(MouseButton::Left), twitter.x, twitter.y),
        &mut page,
    );
    assert_eq!(
        result,
        EventResult::OpenLink("https://twitter.com/MANIKANTAPOTNU5".to_string())
    );

    let missed = handler.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0), &mut page);
    assert_eq!(missed, EventResult::Continue);
}

#[tokio::test]
async fn test_keyboard_focus_cycles_buttons() {
    let (mut page, _terminal) = rendered_page(&Config::default());
    let mut handler = EventHandler::new();

    assert_eq!(handler.handle_event(key(KeyCode::Enter), &mut page), EventResult::Continue);

    handler.handle_event(key(KeyCode::Tab), &mut page);
    assert_eq!(hovered(&page), vec![true, false, false, false]);

    handler.handle_event(key(KeyCode::BackTab), &mut page);
    assert_eq!(hovered(&page), vec![false, false, false, true]);

    handler.handle_event(key(KeyCode::Tab), &mut page);
    handler.handle_event(key(KeyCode::Tab), &mut page);
    assert_eq!(hovered(&page), vec![false, true, false, false]);

    assert_eq!(
        handler.handle_event(key(KeyCode::Enter), &mut page),
        EventResult::OpenLink("https://www.linkedin.com/in/manikantapotnuru/".to_string())
    );
}

#[tokio::test]
async fn test_quit_and_theme_keys() {
    let (mut page, _terminal) = rendered_page(&Config::default());
    let mut handler = EventHandler::new();

    assert_eq!(handler.handle_event(key(KeyCode::Char('q')), &mut page), EventResult::Quit);
    assert_eq!(handler.handle_event(key(KeyCode::Esc), &mut page), EventResult::Quit);
    assert_eq!(
        handler.handle_event(
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            &mut page
        ),
        EventResult::Quit
    );
    assert_eq!(
        handler.handle_event(key(KeyCode::Char('t')), &mut page),
        EventResult::CycleTheme
    );
}

#[tokio::test]
async fn test_unknown_icon_renders_label_only() {
    let mut config = Config::default();
    config.links = vec![LinkConfig {
        icon: "mastodon".to_string(),
        label: "Mastodon".to_string(),
        url: "https://example.social/@me".to_string(),
    }];
    let (page, terminal) = rendered_page(&config);

    assert!(page.buttons()[0].icon().is_none());
    let text = screen_text(&terminal);
    assert!(text.contains("Mastodon"));
    assert!(!text.contains("⎇"));
}
