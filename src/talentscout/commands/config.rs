use crate::commands::{CmdMessage, CmdResult};
use crate::config::ScoutConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = ScoutConfig::load(config_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = ScoutConfig::load(config_dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    tracing::warn!(key = key.as_str(), "unknown config key");
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = ScoutConfig::load(config_dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(config_dir)?;
            tracing::debug!(key = key.as_str(), "config updated");
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use tempfile::TempDir;

    #[test]
    fn set_then_show_key() {
        let dir = TempDir::new().unwrap();
        let res = run(
            dir.path(),
            ConfigAction::Set("page_size".into(), "6".into()),
        )
        .unwrap();
        assert_eq!(res.messages[0].content, "page_size set to 6");

        let res = run(dir.path(), ConfigAction::ShowKey("page_size".into())).unwrap();
        assert_eq!(res.messages[0].content, "6");
    }

    #[test]
    fn invalid_value_is_reported_not_saved() {
        let dir = TempDir::new().unwrap();
        let res = run(
            dir.path(),
            ConfigAction::Set("layout".into(), "tablet".into()),
        )
        .unwrap();
        assert_eq!(res.messages[0].level, MessageLevel::Error);
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn unknown_key_is_reported() {
        let dir = TempDir::new().unwrap();
        let res = run(dir.path(), ConfigAction::ShowKey("colour".into())).unwrap();
        assert_eq!(res.messages[0].level, MessageLevel::Error);
    }

    #[test]
    fn show_all_returns_config() {
        let dir = TempDir::new().unwrap();
        let res = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(res.config, Some(ScoutConfig::default()));
    }
}
