use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

use super::GameMode;

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";
const MAX_BOT_DELAY_MS: u64 = 10_000;

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    file_path: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match file_path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub bot_delay_ms: u64,
    pub default_mode: Option<GameMode>,
    pub show_search_stats: bool,
    pub verbose_logging: bool,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "bot_delay_ms must not exceed {} (got {})",
                MAX_BOT_DELAY_MS, self.bot_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot_delay_ms: 1000,
            default_mode: None,
            show_search_stats: false,
            verbose_logging: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigError, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_through_manager() {
        let config = Config {
            bot_delay_ms: 0,
            default_mode: Some(GameMode::BotVsBot),
            show_search_stats: true,
            verbose_logging: true,
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(&file_path));

        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);

        let fresh_manager = get_config_manager(Some(&file_path));
        assert_eq!(fresh_manager.get_config().unwrap(), config);

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Some("this_file_does_not_exist.yaml"));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let file_path = get_temp_file_path();
        FileContentConfigProvider::new(file_path.clone())
            .set_config_content("default_mode: human_vs_alpha_beta\n")
            .unwrap();

        let loaded = get_config_manager(Some(&file_path)).get_config().unwrap();
        assert_eq!(loaded.default_mode, Some(GameMode::HumanVsAlphaBeta));
        assert_eq!(loaded.bot_delay_ms, Config::default().bot_delay_ms);

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_excessive_delay_is_rejected() {
        let config = Config {
            bot_delay_ms: MAX_BOT_DELAY_MS + 1,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let manager = get_config_manager(Some(&get_temp_file_path()));
        assert!(matches!(
            manager.set_config(&config),
            Err(ConfigError::Validation(_))
        ));
    }
}
