mod app;
mod config;
mod error;
mod session;
mod ui;

use std::{fs, path::Path, sync::Arc};

use crate::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let loaded = config::load()?;

    // Logs go to a file so they never fight the terminal UI for stdout.
    if let Some(parent) = Path::new(&loaded.config.log_file).parent() {
        fs::create_dir_all(parent)?;
    }
    let log_file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&loaded.config.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "trash2cash_tui={level},engine={level}",
            level = loaded.config.log_level
        ))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    let mut app = app::App::new(loaded.config, loaded.fresh);
    app.run().await?;
    Ok(())
}
