use std::sync::OnceLock;
use figment::Figment;
use figment::providers::{Env, Format, Toml};
use serde::Deserialize;

mod gnews_config;
mod log_config;
pub use gnews_config::GNewsConfig;
pub use log_config::LogConfig;


pub static CONFIG: OnceLock<ServerConfig> = OnceLock::new();

pub fn init() {
    let mut config = match load() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("It looks like your config is invalid. The following error occurred: {e}");
            std::process::exit(1);
        }
    };
    apply_legacy_env(
        &mut config,
        std::env::var("API_KEY").ok(),
        std::env::var("PORT").ok(),
    );
    if config.gnews.api_key.is_empty() {
        eprintln!("API_KEY is not set");
        std::process::exit(1);
    }
    CONFIG.set(config).expect("config should be set");
}

pub fn get() -> &'static ServerConfig {
    CONFIG.get().expect("config should be set")
}

/// `config.toml` (or `$APP_CONFIG`), then `APP_`-prefixed env vars.
/// Nested keys use `__`, e.g. `APP_GNEWS__API_KEY`.
pub fn load() -> Result<ServerConfig, figment::Error> {
    Figment::new()
        .merge(Toml::file(
            std::env::var("APP_CONFIG").as_deref().unwrap_or("config.toml"),
        ))
        .merge(Env::prefixed("APP_").split("__").global())
        .extract::<ServerConfig>()
}

/// Plain `API_KEY` and `PORT` are still honoured so existing deployments keep working.
/// Both only fill in what the config left at its default.
pub fn apply_legacy_env(config: &mut ServerConfig, api_key: Option<String>, port: Option<String>) {
    if config.gnews.api_key.is_empty() {
        config.gnews.api_key = api_key.unwrap_or_default();
    }
    if config.listen_addr != default_listen_addr() {
        return;
    }
    if let Some(port) = port.filter(|p| !p.trim().is_empty()) {
        config.listen_addr = format!("0.0.0.0:{}", port.trim());
    }
}


#[derive(Deserialize, Clone, Debug)]
pub struct ServerConfig {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    #[serde(default)]
    pub log: LogConfig,
    pub tls: Option<TlsConfig>,

    #[serde(default)]
    pub gnews: GNewsConfig,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TlsConfig {
    pub cert: String,
    pub key: String,
}

pub fn default_true() -> bool {
    true
}

fn default_listen_addr() -> String {
    "0.0.0.0:3000".into()
}

//
fn default_filter_level() -> String {
    "info".into()
}
fn default_directory() -> String {
    "./logs".into()
}
fn default_file_name() -> String {
    "news-gateway.log".into()
}
fn default_rolling() -> String {
    "daily".into()
}
fn default_format() -> String {
    FORMAT_FULL.into()
}
//


pub const FORMAT_PRETTY: &str = "pretty";
pub const FORMAT_COMPACT: &str = "compact";
pub const FORMAT_JSON: &str = "json";
pub const FORMAT_FULL: &str = "full";
