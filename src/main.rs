#![allow(non_snake_case)]

mod app;
mod components;
mod host;
mod theme;

use std::sync::OnceLock;

use valuecalc_core::HostConfig;

/// Host messaging settings, set once at start-up
static HOST_CONFIG: OnceLock<HostConfig> = OnceLock::new();

/// Get the host messaging settings (set at start-up or default)
pub fn host_config() -> HostConfig {
    HOST_CONFIG.get().cloned().unwrap_or_default()
}

/// Property Value Increase Calculator - desktop preview
#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser, Debug)]
#[command(name = "valuecalc-widget")]
#[command(about = "Property value increase calculator - desktop preview of the embeddable widget")]
struct Args {
    /// Preview window width in logical pixels
    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    /// Preview window height in logical pixels
    #[arg(long, default_value_t = 700.0)]
    height: f64,

    /// Delay before the settled-height report, in milliseconds
    #[arg(long, default_value_t = 1000)]
    settle_delay_ms: u64,
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;
    use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = HostConfig {
        settle_delay_ms: args.settle_delay_ms,
        ..HostConfig::default()
    };
    let _ = HOST_CONFIG.set(config);

    tracing::info!("Starting preview at {}x{}", args.width, args.height);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Property Value Increase Calculator")
            .with_inner_size(LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser console output; fails only if a logger is already installed
    let _ = dioxus::logger::init(tracing::Level::INFO);

    let _ = HOST_CONFIG.set(HostConfig::default());
    tracing::info!("Starting embedded widget");

    dioxus::LaunchBuilder::web().launch(app::App);
}
