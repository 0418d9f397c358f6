//! HTTP server for the payroll engine.
//!
//! Environment:
//! - `PAYROLL_CONFIG_DIR`: configuration directory (default `./config/tz_mainland`,
//!   falling back to the built-in Tanzania mainland tables when it does not exist)
//! - `PAYROLL_BIND_ADDR`: listen address (default `0.0.0.0:8080`)
//! - `PAYROLL_LOG_JSON`: emit JSON log lines when true
//! - `RUST_LOG`: log filter (default `info`)

use std::env;
use std::path::Path;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::{ConfigLoader, PayrollConfig};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG_DIR: &str = "./config/tz_mainland";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if env_bool("PAYROLL_LOG_JSON", false) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

/// An explicitly configured directory must load; the default one may be absent.
fn load_config() -> Result<ConfigLoader, String> {
    match env::var("PAYROLL_CONFIG_DIR") {
        Ok(dir) => ConfigLoader::load(&dir).map_err(|e| e.to_string()),
        Err(_) if Path::new(DEFAULT_CONFIG_DIR).exists() => {
            ConfigLoader::load(DEFAULT_CONFIG_DIR).map_err(|e| e.to_string())
        }
        Err(_) => {
            info!("No configuration directory found, using built-in Tanzania mainland tables");
            Ok(ConfigLoader::from_config(PayrollConfig::tanzania_mainland()))
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_tracing();

    let config = load_config()?;
    info!(
        jurisdiction = %config.metadata().code,
        schedules = config.config().schedules().len(),
        "Configuration loaded"
    );

    let bind_addr = env::var("PAYROLL_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("bind failed: {e}"))?;
    info!("payroll-engine listening on {bind_addr}");

    axum::serve(listener, create_router(AppState::new(config)))
        .await
        .map_err(|e| format!("server failed: {e}"))
}
