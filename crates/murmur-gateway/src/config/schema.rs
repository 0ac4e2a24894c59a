use serde::Deserialize;
use murmur_core::error::{MurmurError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MurmurConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub chat: ChatSection,
}

impl MurmurConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MurmurError::UnsupportedVersion);
        }

        self.gateway.validate()?;
        self.chat.validate()?;

        Ok(())
    }
}

impl Default for MurmurConfig {
    fn default() -> Self {
        Self {
            version: 1,
            gateway: GatewaySection::default(),
            chat: ChatSection::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,

    #[serde(default = "default_ping_interval_ms")]
    pub ping_interval_ms: u64,

    #[serde(default = "default_idle_timeout_ms")]
    pub idle_timeout_ms: u64,

    #[serde(default = "default_max_frame_bytes")]
    pub max_frame_bytes: usize,

    #[serde(default = "default_outbound_queue")]
    pub outbound_queue: usize,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            ping_interval_ms: default_ping_interval_ms(),
            idle_timeout_ms: default_idle_timeout_ms(),
            max_frame_bytes: default_max_frame_bytes(),
            outbound_queue: default_outbound_queue(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        if !(5000..=120000).contains(&self.ping_interval_ms) {
            return Err(MurmurError::BadRequest(
                "gateway.ping_interval_ms must be between 5000 and 120000".into(),
            ));
        }
        if !(10000..=600000).contains(&self.idle_timeout_ms) {
            return Err(MurmurError::BadRequest(
                "gateway.idle_timeout_ms must be between 10000 and 600000".into(),
            ));
        }
        if self.idle_timeout_ms <= self.ping_interval_ms {
            return Err(MurmurError::BadRequest(
                "gateway.idle_timeout_ms must be greater than ping_interval_ms".into(),
            ));
        }
        if !(256..=1_048_576).contains(&self.max_frame_bytes) {
            return Err(MurmurError::BadRequest(
                "gateway.max_frame_bytes must be between 256 and 1048576".into(),
            ));
        }
        if self.outbound_queue == 0 {
            return Err(MurmurError::BadRequest(
                "gateway.outbound_queue must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_ping_interval_ms() -> u64 {
    20000
}
fn default_idle_timeout_ms() -> u64 {
    60000
}
fn default_max_frame_bytes() -> usize {
    8192
}
fn default_outbound_queue() -> usize {
    256
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChatSection {
    /// Reaper sweep interval.
    #[serde(default = "default_reap_interval_ms")]
    pub reap_interval_ms: u64,

    #[serde(default = "default_max_name_chars")]
    pub max_name_chars: usize,

    #[serde(default = "default_max_text_chars")]
    pub max_text_chars: usize,
}

impl Default for ChatSection {
    fn default() -> Self {
        Self {
            reap_interval_ms: default_reap_interval_ms(),
            max_name_chars: default_max_name_chars(),
            max_text_chars: default_max_text_chars(),
        }
    }
}

impl ChatSection {
    pub fn validate(&self) -> Result<()> {
        if !(1000..=600000).contains(&self.reap_interval_ms) {
            return Err(MurmurError::BadRequest(
                "chat.reap_interval_ms must be between 1000 and 600000".into(),
            ));
        }
        if self.max_name_chars == 0 || self.max_text_chars == 0 {
            return Err(MurmurError::BadRequest(
                "chat.max_name_chars and chat.max_text_chars must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

fn default_reap_interval_ms() -> u64 {
    30000
}
fn default_max_name_chars() -> usize {
    32
}
fn default_max_text_chars() -> usize {
    2000
}
