use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;
use url::Url;

const DEFAULT_STORAGE_PATH: &str = "./gto-coach-store.json";
const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub storage_path: PathBuf,
    pub api_base_url: Url,
    pub support_base_url: Url,
    pub api_timeout: Duration,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let api_base_url = get_env_url("API_BASE_URL")?;
        let support_base_url = match env::var("SUPPORT_BASE_URL") {
            Ok(_) => get_env_url("SUPPORT_BASE_URL")?,
            Err(_) => api_base_url.clone(),
        };
        let timeout_secs: u64 = match env::var("API_TIMEOUT_SECS") {
            Ok(_) => get_env_parse("API_TIMEOUT_SECS")?,
            Err(_) => DEFAULT_API_TIMEOUT_SECS,
        };

        Ok(Self {
            server_address: get_env("SERVER_ADDRESS")?,
            storage_path: env::var("STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORAGE_PATH)),
            api_base_url,
            support_base_url,
            api_timeout: Duration::from_secs(timeout_secs.max(1)),
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_parse<T>(name: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = get_env(name)?;
    raw.parse()
        .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e)))
}

fn get_env_url(name: &str) -> Result<Url> {
    let url: Url = get_env_parse(name)?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::Config(format!(
            "Invalid value for {}: unsupported scheme {}",
            name,
            url.scheme()
        )));
    }
    Ok(url)
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> Result<&'static Config> {
    CONFIG
        .get()
        .ok_or_else(|| Error::Config("Configuration has not been initialized".to_string()))
}
