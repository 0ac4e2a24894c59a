//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;

use murmur_core::error::{MurmurError, Result};

pub use schema::{ChatSection, GatewaySection, MurmurConfig};

pub fn load_from_file(path: &str) -> Result<MurmurConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| MurmurError::Internal(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<MurmurConfig> {
    let cfg: MurmurConfig = serde_yaml::from_str(s)
        .map_err(|e| MurmurError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
