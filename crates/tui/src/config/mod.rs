use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/tui.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Display name used as listing owner and in the info bar.
    pub username: String,
    /// IANA timezone name used for timestamp display.
    pub timezone: String,
    /// Fiat price per token shown in the token market.
    pub token_price: f64,
    /// Where the session snapshot is cached between runs.
    pub state_path: String,
    pub log_file: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            username: "You".to_string(),
            timezone: "UTC".to_string(),
            token_price: 0.2,
            state_path: "config/t2c_state.json".to_string(),
            log_file: "config/tui.log".to_string(),
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "trash2cash_tui", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the display name.
    #[arg(long)]
    username: Option<String>,
    /// Override the display timezone (IANA name).
    #[arg(long)]
    timezone: Option<String>,
    /// Override the fiat token price.
    #[arg(long)]
    token_price: Option<f64>,
    /// Override the snapshot cache path.
    #[arg(long)]
    state_path: Option<String>,
    /// Start from the seeded demo data, ignoring any cached snapshot.
    #[arg(long)]
    fresh: bool,
}

#[derive(Debug, Clone)]
pub struct Loaded {
    pub config: AppConfig,
    pub fresh: bool,
}

pub fn load() -> Result<Loaded> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("T2C_TUI"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(username) = args.username {
        settings.username = username;
    }
    if let Some(timezone) = args.timezone {
        settings.timezone = timezone;
    }
    if let Some(token_price) = args.token_price {
        settings.token_price = token_price;
    }
    if let Some(state_path) = args.state_path {
        settings.state_path = state_path;
    }

    Ok(Loaded {
        config: settings,
        fresh: args.fresh,
    })
}
