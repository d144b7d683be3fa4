#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod dom;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::Theme;

/// Global data-file path, set from command line
static DATA_FILE: OnceLock<PathBuf> = OnceLock::new();

/// Global config directory, set from command line
static CONFIG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Theme forced from the command line, if any
static THEME_OVERRIDE: OnceLock<Option<Theme>> = OnceLock::new();

/// Get the project data document path (set from command line or default)
pub fn get_data_file() -> PathBuf {
    DATA_FILE
        .get()
        .cloned()
        .unwrap_or_else(|| PathBuf::from("assets/data/projects.json"))
}

/// Get the file the theme preference persists to
pub fn get_theme_file() -> PathBuf {
    CONFIG_DIR
        .get()
        .cloned()
        .unwrap_or_else(|| {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("folio")
        })
        .join("theme")
}

/// Get the command-line theme override (if set via --theme)
pub fn get_theme_override() -> Option<Theme> {
    THEME_OVERRIDE.get().copied().flatten()
}

fn parse_theme(s: &str) -> Result<Theme, String> {
    Theme::parse(s).map_err(|e| e.to_string())
}

/// Folio - personal portfolio desktop app
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - portfolio gallery, detail modal, and page shell in a desktop window")]
struct Args {
    /// Project data document (defaults to assets/data/projects.json)
    #[arg(short, long)]
    data_file: Option<PathBuf>,

    /// Config directory for the saved theme preference
    #[arg(short, long)]
    config_dir: Option<PathBuf>,

    /// Start with this theme instead of the resolved preference (light|dark)
    #[arg(short, long, value_parser = parse_theme)]
    theme: Option<Theme>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if let Some(path) = args.data_file {
        let _ = DATA_FILE.set(path);
    }
    if let Some(dir) = args.config_dir {
        let _ = CONFIG_DIR.set(dir);
    }
    let _ = THEME_OVERRIDE.set(args.theme);

    tracing::info!(
        data_file = %get_data_file().display(),
        "starting folio-desktop"
    );

    // Tall window: the page is a single scrolling column
    let window_width = 1100.0;
    let window_height = 860.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Folio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
