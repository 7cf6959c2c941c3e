use crate::rules::RuleId;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// `[rules]` table of `lcom.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSettings {
    /// Rule ids suppressed at reporting time, e.g. `["NH003"]`.
    #[serde(default)]
    pub disabled: Vec<String>,
}

/// `[scan]` table of `lcom.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSettings {
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default = "default_skip_generated")]
    pub skip_generated: bool,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            include: Vec::new(),
            exclude: Vec::new(),
            skip_generated: default_skip_generated(),
        }
    }
}

const fn default_skip_generated() -> bool { true }

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LcomToml {
    #[serde(default)]
    pub rules: RuleSettings,
    #[serde(default)]
    pub scan: ScanSettings,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub include_patterns: Vec<Regex>,
    pub exclude_patterns: Vec<Regex>,
    pub disabled_rules: Vec<RuleId>,
    pub skip_generated: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            include_patterns: Vec::new(),
            exclude_patterns: Vec::new(),
            disabled_rules: Vec::new(),
            skip_generated: default_skip_generated(),
        }
    }
}
