use crate::animation::{AnimationSlot, BundleLoader, FrameLibrary};
use crate::config::Config;
use crate::ui::social_button::SocialButton;
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// buildsite - an animated "under construction" page for the terminal
#[derive(Parser, Debug)]
#[command(name = "buildsite")]
#[command(about = "An animated \"under construction\" landing page for the terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log file path
    #[arg(long, global = true, default_value = "buildsite.log")]
    pub log_file: PathBuf,

    /// Theme to start with (midnight, gruvbox-dark, high-contrast)
    #[arg(long, global = true)]
    pub theme: Option<String>,

    /// Animation library source: builtin, a bundle .json, a directory, or a URL
    #[arg(long, global = true)]
    pub library: Option<String>,

    /// Progress bar tick period in milliseconds
    #[arg(long, global = true)]
    pub tick_ms: Option<u64>,

    /// Skip loading the animation library
    #[arg(long, global = true)]
    pub no_animations: bool,
}

impl Cli {
    /// Layer command line flags over the loaded configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(theme) = &self.theme {
            config.theme.name = theme.clone();
        }
        if let Some(library) = &self.library {
            config.animations.library = library.clone();
        }
        if let Some(tick_ms) = self.tick_ms {
            config.progress.tick_ms = tick_ms;
        }
        if self.no_animations {
            config.animations.enabled = false;
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the social links shown on the page
    Links,

    /// Print the effective configuration as TOML
    Config {
        /// Print the built-in defaults instead
        #[arg(long)]
        default: bool,
    },

    /// Load the animation library and check that every asset can be played
    Check,
}

/// Runs the non-interactive subcommands
pub struct CliHandler {
    config: Config,
}

impl CliHandler {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Handle CLI commands, writing to stdout
    pub async fn handle_command(&self, command: Commands) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        self.handle_command_to(command, &mut stdout).await
    }

    pub async fn handle_command_to<W: Write>(&self, command: Commands, out: &mut W) -> Result<()> {
        match command {
            Commands::Links => self.handle_links(out),
            Commands::Config { default } => self.handle_config(default, out),
            Commands::Check => self.handle_check(out).await,
        }
    }

    fn handle_links<W: Write>(&self, out: &mut W) -> Result<()> {
        for link in &self.config.links {
            let button = SocialButton::from_config(link);
            let glyph = button
                .icon()
                .map(|icon| icon.glyph(self.config.theme.icons))
                .unwrap_or(" ");
            writeln!(out, "{} {:<10} {}", glyph, button.label(), button.link())?;
        }
        Ok(())
    }

    fn handle_config<W: Write>(&self, default: bool, out: &mut W) -> Result<()> {
        let rendered = if default {
            Config::default().to_toml_string()?
        } else {
            self.config.to_toml_string()?
        };
        write!(out, "{}", rendered)?;
        Ok(())
    }

    async fn handle_check<W: Write>(&self, out: &mut W) -> Result<()> {
        self.config.validate()?;
        if !self.config.animations.enabled {
            writeln!(out, "Animations are disabled; nothing to check")?;
            return Ok(());
        }

        let source = self.config.library_source()?;
        writeln!(out, "Loading animation library from {}", source)?;
        let loader = BundleLoader::new(source, self.config.request_timeout());
        let bundle = loader.fetch_bundle().await?;
        writeln!(out, "  {} animations available", bundle.len())?;

        let library = FrameLibrary::new(bundle);
        let specs = self.config.animation_specs();
        let assets: Vec<(AnimationSlot, &str)> = specs
            .iter()
            .map(|spec| (spec.slot, spec.asset.as_str()))
            .collect();

        match library.verify(&assets) {
            Ok(players) => {
                for player in players {
                    let (width, height) = player.size();
                    writeln!(
                        out,
                        "  ✓ {:<12} {} ({} frames, {}x{})",
                        player.container().slot,
                        player.asset(),
                        player.frame_count(),
                        width,
                        height
                    )?;
                }
                writeln!(out, "All animations can be played")?;
                Ok(())
            }
            Err(e) => {
                writeln!(out, "  ✗ {}", e)?;
                Err(anyhow!("Animation check failed: {}", e))
            }
        }
    }
}
