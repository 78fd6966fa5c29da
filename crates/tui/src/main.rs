mod renderer;
mod scroller;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use onboard_core::OnboardingConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        eprintln!("Usage: onboard [config.json]");
        eprintln!("  ←/→ swipe  enter next  s skip  g get started  p press  f fonts  q quit");
        eprintln!("  ONBOARD_LOG=<file> writes engine logs (filter with RUST_LOG)");
        return Ok(());
    }

    let _log_guard = init_logging()?;

    let config = match args.get(1) {
        Some(path) => OnboardingConfig::from_path(path)
            .with_context(|| format!("loading config from {path}"))?,
        None => OnboardingConfig::default(),
    };
    tracing::info!(pages = config.page_count, route = %config.main_route, "starting onboarding");

    if let Some(route) = renderer::run_tui(config)? {
        eprintln!("onboarding finished, continuing to {route}");
    }
    Ok(())
}

/// Stdout belongs to the terminal UI, so logs only go to a file, and only
/// when one is asked for.
fn init_logging() -> Result<Option<WorkerGuard>> {
    let Some(path) = std::env::var_os("ONBOARD_LOG").map(PathBuf::from) else {
        return Ok(None);
    };
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file = path.file_name().context("ONBOARD_LOG must name a file")?;

    let appender = tracing_appender::rolling::never(dir, file);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(Some(guard))
}
