use anyhow::{anyhow, Result};

/// Opens a social link outside the terminal
pub trait LinkOpener: Send {
    fn open(&self, url: &str) -> Result<()>;
}

/// Hands links to the system's default browser or mail client
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl LinkOpener for SystemBrowser {
    fn open(&self, url: &str) -> Result<()> {
        webbrowser::open(url).map_err(|e| anyhow!("Failed to open {}: {}", url, e))?;
        tracing::info!("Opened {} in the system browser", url);
        Ok(())
    }
}
