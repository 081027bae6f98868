use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use stress_core::{OutOfRangePolicy, DEFAULT_REPORT_FILE};

/// Optional config file, looked up in the working directory.
pub const CONFIG_FILE: &str = "stress-service.json";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub report_path: PathBuf,
    pub out_of_range: OutOfRangePolicy,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            report_path: PathBuf::from(DEFAULT_REPORT_FILE),
            out_of_range: OutOfRangePolicy::Reject,
        }
    }
}

impl ServiceConfig {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Missing file means defaults; a present but broken file is an error.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))
    }
}
