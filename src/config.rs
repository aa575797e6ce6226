//! Configuration loader/writer plus typed settings structures.
//!
//! Deserializes `page.toml` (the markup contract of element ids and marker
//! names the behaviors bind to, plus the demo UI knobs), writes the embedded
//! default file on first run, and persists edits.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// Embedded default configuration, written out on first run
const DEFAULT_PAGE: &str = include_str!("../defaults/page.toml");

/// Top-level configuration object for the page and its behaviors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dropdown: DropdownConfig,
    #[serde(default)]
    pub disclosure: DisclosureConfig,
    #[serde(default)]
    pub menu: MenuConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Binding contract for the navbar dropdown: which element acts as the
/// trigger, which element is the menu, and which marker shows the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownConfig {
    #[serde(default = "default_dropdown_trigger")]
    pub trigger: String,
    #[serde(default = "default_dropdown_menu")]
    pub menu: String,
    #[serde(default = "default_dropdown_marker")]
    pub marker: String,
}

/// Binding contract for the disclosure pair: a trigger link plus a primary
/// and an optional secondary panel, each with its own visibility marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisclosureConfig {
    #[serde(default = "default_disclosure_trigger")]
    pub trigger: String,
    #[serde(default = "default_disclosure_primary")]
    pub primary: String,
    #[serde(default = "default_disclosure_secondary")]
    pub secondary: String,
    #[serde(default = "default_disclosure_primary_marker")]
    pub primary_marker: String,
    #[serde(default = "default_disclosure_secondary_marker")]
    pub secondary_marker: String,
}

/// Demo dropdown menu contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuConfig {
    #[serde(default = "default_menu_items")]
    pub items: Vec<String>,
}

/// Demo UI knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Prefix status bar messages with a HH:MM:SS timestamp
    #[serde(default = "default_show_timestamps")]
    pub show_timestamps: bool,
    /// Frame interval for the demo loop, in milliseconds
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

fn default_dropdown_trigger() -> String {
    "hamburger".to_string()
}

fn default_dropdown_menu() -> String {
    "dropdown-menu".to_string()
}

fn default_dropdown_marker() -> String {
    "show".to_string()
}

fn default_disclosure_trigger() -> String {
    "faq_link".to_string()
}

fn default_disclosure_primary() -> String {
    "faq_text".to_string()
}

fn default_disclosure_secondary() -> String {
    "command".to_string()
}

fn default_disclosure_primary_marker() -> String {
    "faq-visible".to_string()
}

fn default_disclosure_secondary_marker() -> String {
    "command-visible".to_string()
}

fn default_menu_items() -> Vec<String> {
    vec![
        "Dashboard".to_string(),
        "Subscribers".to_string(),
        "Settings".to_string(),
        "Log out".to_string(),
    ]
}

fn default_show_timestamps() -> bool {
    true
}

fn default_tick_ms() -> u64 {
    250
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            trigger: default_dropdown_trigger(),
            menu: default_dropdown_menu(),
            marker: default_dropdown_marker(),
        }
    }
}

impl Default for DisclosureConfig {
    fn default() -> Self {
        Self {
            trigger: default_disclosure_trigger(),
            primary: default_disclosure_primary(),
            secondary: default_disclosure_secondary(),
            primary_marker: default_disclosure_primary_marker(),
            secondary_marker: default_disclosure_secondary_marker(),
        }
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            items: default_menu_items(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_timestamps: default_show_timestamps(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl Config {
    /// Load configuration from the standard location, writing the embedded
    /// default file first if none exists yet.
    pub fn load_with_options(tick_override: Option<u64>) -> Result<Self> {
        Self::extract_defaults()?;
        let config_path = Self::config_path()?;
        Self::load_from_path(&config_path, tick_override)
    }

    /// Load configuration from an explicit path.
    pub fn load_from_path(path: &Path, tick_override: Option<u64>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;
        let mut config: Config = toml::from_str(&contents)
            .context(format!("Failed to parse config file: {:?}", path))?;

        // Override frame interval from the command line
        if let Some(tick_ms) = tick_override {
            config.ui.tick_ms = tick_ms;
        }

        for warning in config.validate_and_fix() {
            tracing::warn!("{}", warning);
        }

        Ok(config)
    }

    /// Save configuration to the standard location.
    pub fn save(&self) -> Result<()> {
        self.save_to_path(&Self::config_path()?)
    }

    /// Save configuration to an explicit path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents).context(format!("Failed to write config file: {:?}", path))?;
        Ok(())
    }

    /// Check for degenerate values and repair the ones with an obvious fix.
    /// Returns a human-readable message per finding.
    pub fn validate_and_fix(&mut self) -> Vec<String> {
        let mut findings = Vec::new();

        if self.dropdown.trigger.trim().is_empty() {
            self.dropdown.trigger = default_dropdown_trigger();
            findings.push("dropdown.trigger was empty, restored default".to_string());
        }
        if self.dropdown.menu.trim().is_empty() {
            self.dropdown.menu = default_dropdown_menu();
            findings.push("dropdown.menu was empty, restored default".to_string());
        }
        if self.dropdown.marker.trim().is_empty() {
            self.dropdown.marker = default_dropdown_marker();
            findings.push("dropdown.marker was empty, restored default".to_string());
        }
        if self.dropdown.trigger == self.dropdown.menu {
            findings.push(format!(
                "dropdown.trigger and dropdown.menu both resolve to '{}'; the menu will toggle on clicks to itself",
                self.dropdown.trigger
            ));
        }

        if self.disclosure.trigger.trim().is_empty() {
            self.disclosure.trigger = default_disclosure_trigger();
            findings.push("disclosure.trigger was empty, restored default".to_string());
        }
        if self.disclosure.primary.trim().is_empty() {
            self.disclosure.primary = default_disclosure_primary();
            findings.push("disclosure.primary was empty, restored default".to_string());
        }
        if self.disclosure.primary_marker.trim().is_empty() {
            self.disclosure.primary_marker = default_disclosure_primary_marker();
            findings.push("disclosure.primary_marker was empty, restored default".to_string());
        }
        if self.disclosure.secondary_marker.trim().is_empty() {
            self.disclosure.secondary_marker = default_disclosure_secondary_marker();
            findings.push("disclosure.secondary_marker was empty, restored default".to_string());
        }
        if self.disclosure.primary == self.disclosure.secondary
            && self.disclosure.primary_marker == self.disclosure.secondary_marker
        {
            findings.push(format!(
                "disclosure.primary and disclosure.secondary both flip '{}' on '{}'; the two flips cancel out",
                self.disclosure.primary_marker, self.disclosure.primary
            ));
        }

        if self.menu.items.is_empty() {
            findings.push("menu.items is empty; the dropdown will open an empty frame".to_string());
        }

        if self.ui.tick_ms == 0 {
            self.ui.tick_ms = default_tick_ms();
            findings.push(format!(
                "ui.tick_ms was 0 (busy loop), restored default {}",
                self.ui.tick_ms
            ));
        }

        findings
    }

    /// Write the embedded default config if no file exists yet (idempotent).
    fn extract_defaults() -> Result<()> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            return Ok(());
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .context(format!("Failed to create config directory: {:?}", parent))?;
        }
        fs::write(&config_path, DEFAULT_PAGE)
            .context(format!("Failed to write default config: {:?}", config_path))?;
        tracing::info!("Wrote default page config to {:?}", config_path);
        Ok(())
    }

    /// Get the base peekaboo directory (~/.peekaboo/)
    /// Can be overridden with the PEEKABOO_DIR environment variable
    pub fn config_dir() -> Result<PathBuf> {
        if let Ok(custom_dir) = std::env::var("PEEKABOO_DIR") {
            return Ok(PathBuf::from(custom_dir));
        }

        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".peekaboo"))
    }

    /// Get path to page.toml
    /// Returns: ~/.peekaboo/page.toml (or $PEEKABOO_DIR/page.toml)
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("page.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_contract() {
        let config = Config::default();

        assert_eq!(config.dropdown.trigger, "hamburger");
        assert_eq!(config.dropdown.menu, "dropdown-menu");
        assert_eq!(config.dropdown.marker, "show");

        assert_eq!(config.disclosure.trigger, "faq_link");
        assert_eq!(config.disclosure.primary, "faq_text");
        assert_eq!(config.disclosure.secondary, "command");
        assert_eq!(config.disclosure.primary_marker, "faq-visible");
        assert_eq!(config.disclosure.secondary_marker, "command-visible");
    }

    #[test]
    fn test_embedded_default_parses_to_defaults() {
        let config: Config = toml::from_str(DEFAULT_PAGE).expect("embedded default must parse");

        assert_eq!(config.dropdown, DropdownConfig::default());
        assert_eq!(config.disclosure, DisclosureConfig::default());
        assert!(!config.menu.items.is_empty());
        assert!(config.ui.tick_ms > 0);
    }

    #[test]
    fn test_partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [dropdown]
            trigger = "burger-button"

            [ui]
            tick_ms = 100
            "#,
        )
        .unwrap();

        assert_eq!(config.dropdown.trigger, "burger-button");
        assert_eq!(config.dropdown.menu, "dropdown-menu");
        assert_eq!(config.disclosure.trigger, "faq_link");
        assert_eq!(config.ui.tick_ms, 100);
        assert!(config.ui.show_timestamps);
    }

    #[test]
    fn test_validate_restores_empty_ids() {
        let mut config = Config::default();
        config.dropdown.trigger = "  ".to_string();
        config.disclosure.primary_marker = String::new();

        let findings = config.validate_and_fix();

        assert_eq!(config.dropdown.trigger, "hamburger");
        assert_eq!(config.disclosure.primary_marker, "faq-visible");
        assert_eq!(findings.len(), 2);
    }

    #[test]
    fn test_validate_repairs_zero_tick() {
        let mut config = Config::default();
        config.ui.tick_ms = 0;

        let findings = config.validate_and_fix();

        assert_eq!(config.ui.tick_ms, 250);
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn test_validate_flags_cancelling_disclosure() {
        let mut config = Config::default();
        config.disclosure.secondary = config.disclosure.primary.clone();
        config.disclosure.secondary_marker = config.disclosure.primary_marker.clone();

        let findings = config.validate_and_fix();

        assert_eq!(findings.len(), 1);
        assert!(findings[0].contains("cancel"));
    }

    #[test]
    fn test_save_load_roundtrip() {
        let mut config = Config::default();
        config.dropdown.marker = "open".to_string();
        config.ui.show_timestamps = false;

        let path = std::env::temp_dir().join("peekaboo-config-roundtrip.toml");
        config.save_to_path(&path).unwrap();
        let loaded = Config::load_from_path(&path, None).unwrap();
        let _ = fs::remove_file(&path);

        assert_eq!(loaded, config);
    }
}
