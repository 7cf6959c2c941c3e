// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::{CONFIG_FILE, IGNORE_FILE};
pub use self::types::{Config, LcomToml, RuleSettings, ScanSettings};

use crate::error::Result;
use crate::rules::RuleId;
use std::path::Path;

/// Directory names never descended into during discovery.
pub const PRUNE_DIRS: &[&str] = &["bin", "obj", ".git", ".vs", "node_modules"];

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the configuration for a scan rooted at `root`, layering
    /// `lcom.toml` and `.lcomignore` over the defaults.
    ///
    /// # Errors
    /// Returns error on unreadable or malformed config files.
    pub fn load(root: &Path) -> Result<Self> {
        let mut config = Self::new();
        config.load_local_config(root)?;
        Ok(config)
    }

    /// # Errors
    /// Returns error on unreadable or malformed config files.
    pub fn load_local_config(&mut self, root: &Path) -> Result<()> {
        if let Some(toml) = io::load_toml_config(root)? {
            tracing::debug!(root = %root.display(), "loaded {CONFIG_FILE}");
            io::apply_toml(self, &toml)?;
        }
        io::load_ignore_file(self, root)
    }

    /// # Errors
    /// Returns error if the TOML is malformed or names unknown rules.
    pub fn parse_toml(&mut self, content: &str) -> Result<()> {
        let toml: LcomToml = toml::from_str(content).map_err(|source| {
            crate::error::LcomError::Config {
                source,
                path: CONFIG_FILE.into(),
            }
        })?;
        io::apply_toml(self, &toml)
    }

    /// # Errors
    /// Returns error if the line is not a valid regex.
    pub fn process_ignore_line(&mut self, line: &str) -> Result<()> {
        io::process_ignore_line(self, line)
    }

    #[must_use]
    pub fn is_rule_enabled(&self, rule: RuleId) -> bool {
        !self.disabled_rules.contains(&rule)
    }
}
