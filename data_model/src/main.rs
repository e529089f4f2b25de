//! Developer tool printing what the Telegram client passes to a Mini App.
//!
//! Reads a launch URL from the first argument or `TG_WEBAPP_LAUNCH_URL`, or a bare init data
//! string from `TG_WEBAPP_INIT_DATA`, and prints the decoded launch parameters as JSON.
//! Nothing is validated against the bot token.

#![cfg(feature = "executable")]

use color_eyre::{
    Result,
    eyre::{WrapErr as _, eyre},
};
use dotenvy::dotenv;
use tg_webapp_data_model::{BotApiVersion, Feature, InitData, LaunchParams};
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber, filter::LevelFilter};

/// Environment variable with a full launch URL.
const LAUNCH_URL_ENV_VAR: &str = "TG_WEBAPP_LAUNCH_URL";
/// Environment variable with a raw init data string.
const INIT_DATA_ENV_VAR: &str = "TG_WEBAPP_INIT_DATA";
/// Environment variable with the version the Mini App requires.
const MIN_VERSION_ENV_VAR: &str = "TG_WEBAPP_MIN_VERSION";

#[expect(clippy::print_stdout, reason = "decoded JSON is the output of the tool")]
fn main() -> Result<()> {
    init_logger().wrap_err("Failed to initialize logger")?;

    let _ignored = dotenv();

    let launch_params = read_launch_params()?;
    info!(
        version = %launch_params.version,
        platform = %launch_params.platform,
        "Decoded launch parameters"
    );

    let unsupported: Vec<_> = Feature::ALL
        .iter()
        .filter(|feature| launch_params.version.ensure(**feature).is_err())
        .map(ToString::to_string)
        .collect();
    if !unsupported.is_empty() {
        info!(?unsupported, "Members unavailable on this client");
    }

    if let Some(min_version) = read_optional_env_var(MIN_VERSION_ENV_VAR)? {
        let Ok(min_version) = min_version.parse::<BotApiVersion>();
        if !launch_params.version.is_at_least(&min_version) {
            warn!(
                reported = %launch_params.version,
                required = %min_version,
                "Client is older than required"
            );
        }
    }

    let json = serde_json::to_string_pretty(&launch_params)
        .wrap_err("Failed to serialize launch parameters")?;
    println!("{json}");

    Ok(())
}

/// Read launch parameters from the command line or environment.
fn read_launch_params() -> Result<LaunchParams> {
    let launch_url = match std::env::args().nth(1) {
        Some(arg) => Some(arg),
        None => read_optional_env_var(LAUNCH_URL_ENV_VAR)?,
    };
    if let Some(launch_url) = launch_url {
        return LaunchParams::from_url(&launch_url).wrap_err("Failed to parse launch URL");
    }

    let raw = read_optional_env_var(INIT_DATA_ENV_VAR)?.ok_or_else(|| {
        eyre!("Pass a launch URL as an argument or set `{LAUNCH_URL_ENV_VAR}` or `{INIT_DATA_ENV_VAR}`")
    })?;
    Ok(LaunchParams {
        init_data: InitData::new(raw).wrap_err("Failed to parse init data")?,
        ..LaunchParams::default()
    })
}

/// Read environment variable treating empty value as absent.
fn read_optional_env_var(var: &str) -> Result<Option<String>> {
    match std::env::var(var) {
        Ok(value) if value.is_empty() => {
            info!("`{var}` environment variable is empty, ignoring it");
            Ok(None)
        }
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(err).wrap_err_with(|| format!("Failed to read `{var}` environment variable")),
    }
}

/// Initialize logger.
fn init_logger() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::TRACE)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber).wrap_err("Failed to set global logger")
}
