pub mod animation;
pub mod app;
pub mod browser;
pub mod cli;
pub mod config;
pub mod events;
pub mod progress;
pub mod theme;
pub mod ui;

pub use app::App;
