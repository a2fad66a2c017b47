#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod media;
mod theme;
mod viewport;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use invitation_core::InvitationConfig;
use tracing_subscriber::EnvFilter;

/// Global invitation config, set from command line
static CONFIG: OnceLock<InvitationConfig> = OnceLock::new();

/// Initial logical window size, set from command line
static WINDOW_SIZE: OnceLock<(u32, u32)> = OnceLock::new();

/// Get the invitation config (loaded at startup or default)
pub fn get_config() -> InvitationConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Get the initial logical window size
pub fn get_window_size() -> (u32, u32) {
    WINDOW_SIZE.get().copied().unwrap_or((480, 860))
}

/// Default config location: <config dir>/concert-invitation/invitation.json
fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("concert-invitation")
        .join("invitation.json")
}

/// Concert Invitation - animated invitation card
#[derive(Parser, Debug)]
#[command(name = "invitation-desktop")]
#[command(about = "Concert Invitation - animated invitation card with music and confetti")]
struct Args {
    /// Invitation config file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Audio file for the first track
    #[arg(short, long)]
    audio: Option<String>,

    /// Window width in logical pixels (below 768 gives the phone layout)
    #[arg(long, default_value_t = 480)]
    width: u32,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 860)]
    height: u32,

    /// Log filter, e.g. "invitation_core=debug" (overrides RUST_LOG)
    #[arg(long)]
    log: Option<String>,
}

fn main() {
    let args = Args::parse();

    let filter = match args.log.as_deref() {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let loaded = match args.config {
        Some(ref path) => InvitationConfig::load(path),
        None => InvitationConfig::load_or_default(&default_config_path()),
    };
    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load invitation config: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(audio) = args.audio {
        config.override_audio(audio);
    }

    let title = format!("{} · {}", config.details.artist, config.details.title);
    tracing::info!(
        "Starting '{}' ({} track(s), {}x{})",
        title,
        config.tracks.len(),
        args.width,
        args.height
    );

    let _ = CONFIG.set(config);
    let _ = WINDOW_SIZE.set((args.width, args.height));

    // Configure desktop window
    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(LogicalSize::new(f64::from(args.width), f64::from(args.height)))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);
}
