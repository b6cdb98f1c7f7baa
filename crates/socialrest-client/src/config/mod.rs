//! Client config loader (strict parsing).
//!
//! Only the default path may be absent; built-in defaults stand in for it.
//! An explicit path that cannot be read is an error naming that path.

pub mod schema;

use std::fs;
use std::io::ErrorKind as IoErrorKind;

use socialrest_core::error::{Result, SocialRestError};

pub use schema::{ClientConfig, ClientSection, Credentials, Fixtures};

pub const DEFAULT_PATH: &str = "socialrest.yaml";

pub fn load_from_file(path: &str) -> Result<ClientConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| SocialRestError::Internal(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ClientConfig> {
    let cfg: ClientConfig = serde_yaml::from_str(s)
        .map_err(|e| SocialRestError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load `path`, falling back to `ClientConfig::default()` when the default
/// file does not exist.
pub fn load_or_default(path: &str) -> Result<ClientConfig> {
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == IoErrorKind::NotFound && path == DEFAULT_PATH => {
            tracing::info!(path, "config file not found, using defaults");
            Ok(ClientConfig::default())
        }
        Err(e) => Err(SocialRestError::Internal(format!(
            "read config {path} failed: {e}"
        ))),
    }
}
