use crate::error::{Result, ScoutError};
use crate::filter::{EditorLayout, Gender};
use crate::results::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Keys accepted by `get` / `set`, in display order.
pub const KEYS: &[&str] = &[
    "catalog_path",
    "default_gender",
    "strict_gender",
    "premium",
    "page_size",
    "layout",
];

/// Configuration for talentscout, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoutConfig {
    /// JSON catalog to load instead of the built-in sample
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,

    /// Seed gender when none is given on the command line
    #[serde(default = "default_gender")]
    pub default_gender: Gender,

    /// Filter records on gender instead of treating it as context only
    #[serde(default)]
    pub strict_gender: bool,

    /// Whether ethnicity and language can be edited
    #[serde(default = "default_premium")]
    pub premium: bool,

    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default)]
    pub layout: EditorLayout,
}

fn default_gender() -> Gender {
    Gender::Male
}

fn default_premium() -> bool {
    true
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            default_gender: default_gender(),
            strict_gender: false,
            premium: default_premium(),
            page_size: default_page_size(),
            layout: EditorLayout::default(),
        }
    }
}

impl ScoutConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&content)?;
        for key in raw.keys() {
            if !KEYS.contains(&key.as_str()) {
                tracing::warn!(key = key.as_str(), "ignoring unknown config key");
            }
        }
        let config: ScoutConfig = serde_json::from_value(serde_json::Value::Object(raw))?;
        if config.default_gender == Gender::Unset {
            return Err(ScoutError::Config(
                "default_gender cannot be unset".to_string(),
            ));
        }
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "catalog_path" => Some(
                self.catalog_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            "default_gender" => Some(self.default_gender.to_string()),
            "strict_gender" => Some(self.strict_gender.to_string()),
            "premium" => Some(self.premium.to_string()),
            "page_size" => Some(self.page_size.to_string()),
            "layout" => Some(self.layout.to_string()),
            _ => None,
        }
    }

    /// Set a key from its text form. Errors are user-facing messages.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "catalog_path" => {
                let trimmed = value.trim();
                self.catalog_path = if trimmed.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(trimmed))
                };
            }
            "default_gender" => {
                let gender: Gender = value.parse().map_err(|e: ScoutError| e.to_string())?;
                if gender == Gender::Unset {
                    return Err("default_gender must be female, male or other".to_string());
                }
                self.default_gender = gender;
            }
            "strict_gender" => self.strict_gender = parse_bool(key, value)?,
            "premium" => self.premium = parse_bool(key, value)?,
            "page_size" => {
                let n: usize = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("page_size must be a positive integer, got {}", value))?;
                if n == 0 {
                    return Err("page_size must be at least 1".to_string());
                }
                self.page_size = n;
            }
            "layout" => {
                self.layout = value.parse().map_err(|e: ScoutError| e.to_string())?;
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    /// Every key with its current value.
    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .map(|k| (*k, self.get(k).unwrap_or_default()))
            .collect()
    }
}

fn parse_bool(key: &str, value: &str) -> std::result::Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(format!("{} must be true or false, got {}", key, value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ScoutConfig::default();
        assert_eq!(config.default_gender, Gender::Male);
        assert!(!config.strict_gender);
        assert!(config.premium);
        assert_eq!(config.page_size, 12);
        assert_eq!(config.layout, EditorLayout::Desktop);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = ScoutConfig::load(dir.path()).unwrap();
        assert_eq!(config, ScoutConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested");

        let mut config = ScoutConfig::default();
        config.set("layout", "mobile").unwrap();
        config.set("strict_gender", "yes").unwrap();
        config.save(&nested).unwrap();

        let loaded = ScoutConfig::load(&nested).unwrap();
        assert_eq!(loaded.layout, EditorLayout::Mobile);
        assert!(loaded.strict_gender);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"page_size": 5, "colour": "blue"}"#,
        )
        .unwrap();
        let config = ScoutConfig::load(dir.path()).unwrap();
        assert_eq!(config.page_size, 5);
        assert!(config.premium);
    }

    #[test]
    fn test_unset_default_gender_in_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"default_gender": "unset"}"#,
        )
        .unwrap();
        assert!(matches!(
            ScoutConfig::load(dir.path()),
            Err(ScoutError::Config(_))
        ));
    }

    #[test]
    fn test_set_validates() {
        let mut config = ScoutConfig::default();
        assert!(config.set("page_size", "0").is_err());
        assert!(config.set("page_size", "many").is_err());
        assert!(config.set("premium", "maybe").is_err());
        assert!(config.set("default_gender", "unset").is_err());
        assert!(config.set("layout", "tablet").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config, ScoutConfig::default());
    }

    #[test]
    fn test_catalog_path_round_trip() {
        let mut config = ScoutConfig::default();
        config.set("catalog_path", "/tmp/creators.json").unwrap();
        assert_eq!(config.get("catalog_path").unwrap(), "/tmp/creators.json");
        config.set("catalog_path", "").unwrap();
        assert_eq!(config.catalog_path, None);
    }

    #[test]
    fn test_list_all_covers_every_key() {
        let listed = ScoutConfig::default().list_all();
        let keys: Vec<_> = listed.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, KEYS);
    }
}
