use anyhow::{Context, Result};
use clap::Parser;
use langshelf::app::App;
use langshelf::cli::Cli;
use langshelf::styles::{init_theme, ThemeType};
use langshelf::tui::{install_panic_hook, Tui};
use langshelf::{catalog, utils, Config};
use tracing_appender::non_blocking::WorkerGuard;

/// Log to a file; the terminal belongs to the TUI
fn init_logging() -> Result<WorkerGuard> {
    let log_dir = utils::get_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, "langshelf.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    Ok(guard)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(command) = &cli.command {
        return command.execute(catalog(), &mut std::io::stdout().lock());
    }

    install_panic_hook();
    let _guard = init_logging()?;

    let config_path = cli.config.clone().unwrap_or_else(utils::get_config_path);
    let config = Config::load(&config_path)?;

    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    let theme_type = match &cli.theme {
        Some(name) => ThemeType::resolve(name, no_color),
        None => config.theme_type(no_color),
    };
    init_theme(theme_type);
    tracing::info!(
        "Starting langshelf (theme {:?}, keymap {})",
        theme_type,
        config.keymap.preset.name()
    );

    let mut tui = Tui::new()?;
    let mut app = App::new(config, config_path, catalog());
    app.run(&mut tui)
}
