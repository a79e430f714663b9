//! Policy configuration.
//!
//! The model constants (funding buffer, valuation multiple, score scale,
//! threshold tables) are named, overridable values rather than inline
//! magic numbers. A TOML file may override any subset; everything else
//! falls back to the canonical defaults.

use crate::portfolio::PortfolioPolicy;
use crate::projection::ProjectionPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    pub projection: ProjectionPolicy,
    pub portfolio: PortfolioPolicy,
}

impl PolicyConfig {
    /// Load from a TOML file. A missing path yields the defaults; an
    /// unparsable file is an error, not a silent fallback.
    pub fn load(path: &Path) -> Result<PolicyConfig, Box<dyn std::error::Error>> {
        if !path.exists() {
            return Ok(PolicyConfig::default());
        }
        let text = std::fs::read_to_string(path)?;
        let config = toml::from_str(&text)?;
        Ok(config)
    }
}
