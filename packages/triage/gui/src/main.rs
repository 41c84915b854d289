mod api;
mod app;
mod audio;
mod components;
mod config;
mod effects;
mod theme;
mod views;
mod widgets;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

use app::TriageApp;
use config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("invalid configuration")?;

    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::rfc_3339())
        .with_target(false)
        .init();

    info!(
        server = %config.server_url,
        language = %config.language,
        speech = config.speech_enabled,
        "starting triage chat client"
    );

    iced::application(TriageApp::title, TriageApp::update, TriageApp::view)
        .subscription(TriageApp::subscription)
        .theme(TriageApp::theme)
        .window_size((520.0, 800.0))
        .run_with(move || TriageApp::new(config))?;

    Ok(())
}
