use crate::animation::{BundleLoader, LibraryLoader};
use crate::browser::{LinkOpener, SystemBrowser};
use crate::config::Config;
use crate::events::{EventHandler, EventResult};
use crate::theme::{Theme, ThemeManager};
use crate::ui::Page;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Redraw cadence; animation frames advance on the measured delta between draws
const FRAME_RATE: Duration = Duration::from_millis(50);

pub struct App {
    config: Config,
    themes: ThemeManager,
    event_handler: EventHandler,
    opener: Box<dyn LinkOpener>,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let mut themes = ThemeManager::new();
        if let Err(e) = themes.set_theme(&config.theme.name) {
            tracing::warn!("{}; falling back to {}", e, themes.current_theme().name);
        }

        Ok(Self {
            config,
            themes,
            event_handler: EventHandler::new(),
            opener: Box::new(SystemBrowser),
        })
    }

    pub fn with_link_opener(mut self, opener: Box<dyn LinkOpener>) -> Self {
        self.opener = opener;
        self
    }

    pub fn theme(&self) -> &Theme {
        self.themes.current_theme()
    }

    /// Loader for the configured animation library, or None when animations are off
    pub fn library_loader(&self) -> Result<Option<Arc<dyn LibraryLoader>>> {
        if !self.config.animations.enabled {
            return Ok(None);
        }
        let source = self.config.library_source()?;
        Ok(Some(Arc::new(BundleLoader::new(
            source,
            self.config.request_timeout(),
        ))))
    }

    /// Apply the outcome of an input event; returns false when the app should exit
    pub fn apply(&mut self, result: EventResult) -> bool {
        match result {
            EventResult::Continue => {}
            EventResult::Quit => return false,
            EventResult::CycleTheme => {
                self.themes.cycle();
            }
            EventResult::OpenLink(url) => {
                if let Err(e) = self.opener.open(&url) {
                    tracing::warn!("{}", e);
                }
            }
        }
        true
    }

    pub async fn run(&mut self) -> Result<()> {
        // Check if we're running in a proper terminal
        if !io::stdout().is_tty() {
            return Err(anyhow::anyhow!(
                "buildsite requires a terminal (TTY) to run. Use `buildsite links` to print the links instead."
            ));
        }

        let library = self.library_loader()?;

        // Setup terminal
        enable_raw_mode()
            .map_err(|e| anyhow::anyhow!("Failed to enable raw mode: {}", e))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .map_err(|e| anyhow::anyhow!("Failed to setup terminal: {}", e))?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)
            .map_err(|e| anyhow::anyhow!("Failed to create terminal: {}", e))?;

        let mut page = Page::mount(&self.config, library);
        let result = self.run_loop(&mut terminal, &mut page).await;
        page.unmount();

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn run_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        page: &mut Page,
    ) -> Result<()> {
        let mut last_frame = Instant::now();

        loop {
            let now = Instant::now();
            page.advance_animations(now.duration_since(last_frame));
            last_frame = now;

            let theme = self.themes.current_theme();
            terminal.draw(|f| page.render(f, theme))?;
            if page.after_render() {
                tracing::info!("Animations ready");
            }

            // Yield so the ticker and library tasks get a turn on this worker.
            tokio::task::yield_now().await;

            let timeout = FRAME_RATE
                .checked_sub(last_frame.elapsed())
                .unwrap_or(Duration::from_secs(0));
            if event::poll(timeout)? {
                let result = self.event_handler.handle_event(event::read()?, page);
                if !self.apply(result) {
                    tracing::info!("Quit requested");
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct RecordingOpener {
        opened: Arc<Mutex<Vec<String>>>,
    }

    impl LinkOpener for RecordingOpener {
        fn open(&self, url: &str) -> Result<()> {
            self.opened.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    struct FailingOpener;

    impl LinkOpener for FailingOpener {
        fn open(&self, url: &str) -> Result<()> {
            Err(anyhow::anyhow!("no browser for {}", url))
        }
    }

    #[test]
    fn test_open_link_goes_through_opener() {
        let opener = RecordingOpener::default();
        let mut app = App::new(Config::default())
            .unwrap()
            .with_link_opener(Box::new(opener.clone()));

        let url = "https://github.com/ManikantaPotnuru9176".to_string();
        assert!(app.apply(EventResult::OpenLink(url.clone())));
        assert!(app.apply(EventResult::Continue));
        assert_eq!(*opener.opened.lock().unwrap(), vec![url]);
    }

    #[test]
    fn test_failed_open_keeps_running() {
        let mut app = App::new(Config::default())
            .unwrap()
            .with_link_opener(Box::new(FailingOpener));
        assert!(app.apply(EventResult::OpenLink("mailto:someone@example.com".to_string())));
    }

    #[test]
    fn test_cycle_theme_and_quit() {
        let mut app = App::new(Config::default()).unwrap();
        assert_eq!(app.theme().name, "midnight");

        assert!(app.apply(EventResult::CycleTheme));
        assert_eq!(app.theme().name, "gruvbox-dark");

        assert!(!app.apply(EventResult::Quit));
    }

    #[test]
    fn test_configured_theme_and_validation() {
        let mut config = Config::default();
        config.theme.name = "high-contrast".to_string();
        assert_eq!(App::new(config).unwrap().theme().name, "high-contrast");

        // An unknown theme falls back to the default instead of failing.
        let mut config = Config::default();
        config.theme.name = "solarized".to_string();
        assert_eq!(App::new(config).unwrap().theme().name, "midnight");

        let mut config = Config::default();
        config.progress.tick_ms = 0;
        assert!(App::new(config).is_err());
    }
}
