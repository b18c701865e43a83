//! Persisted store credentials.
//!
//! The credential file is a small JSON object kept next to the executable:
//!
//! ```json
//! {
//!   "domain": "my-store",
//!   "accessToken": "shpat_..."
//! }
//! ```
//!
//! It is created once by the first-run prompt (see [`load_or_init_config`])
//! and only read afterwards.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

mod init;

pub use init::{load_or_init_config, ConfigInitResult};

/// File name of the credential store.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Store domain and Admin API credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Store subdomain, without protocol or `.myshopify.com` suffix.
    pub domain: String,
    /// Admin API access token (or private-app password).
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

impl Config {
    /// Build a config from user-entered values, normalizing the domain.
    pub fn from_input(domain: &str, access_token: &str) -> Result<Self, ConfigError> {
        let domain = normalize_domain(domain);
        if domain.is_empty() {
            return Err(ConfigError::Invalid("domain cannot be empty".to_string()));
        }
        let access_token = access_token.trim();
        if access_token.is_empty() {
            return Err(ConfigError::Invalid(
                "access token cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            domain,
            access_token: access_token.to_string(),
        })
    }
}

/// Default credential path: `config.json` in the executable's directory.
pub fn default_config_path() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    exe.parent().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// Read and parse an existing credential file.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Write `config` as indented JSON to a path that must not exist yet.
///
/// Returns `Ok(false)` without touching the file when another process created
/// it first.
pub fn write_new_config(path: &Path, config: &Config) -> Result<bool, ConfigError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let text = serde_json::to_string_pretty(config)?;

    // create_new avoids clobbering a file written concurrently.
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(mut file) => {
            file.write_all(text.as_bytes())?;
            Ok(true)
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(ConfigError::Io(e)),
    }
}

/// Reduce pasted store URLs to the bare subdomain.
///
/// `https://my-store.myshopify.com/` becomes `my-store`.
pub fn normalize_domain(input: &str) -> String {
    let mut domain = input.trim();
    for scheme in ["https://", "http://"] {
        if let Some(rest) = domain.strip_prefix(scheme) {
            domain = rest;
        }
    }
    domain = domain.trim_end_matches('/');
    if let Some(rest) = domain.strip_suffix(".myshopify.com") {
        domain = rest;
    }
    domain.to_string()
}
