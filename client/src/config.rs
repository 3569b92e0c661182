pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, Validate};
use common::engine::tictactoe::{BotType, FirstPlayerMode};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

fn default_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path_override: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, Config> {
    match path_override {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&default_config_path()),
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum BotTypeConfig {
    Random,
    Minimax,
}

impl From<BotTypeConfig> for BotType {
    fn from(config: BotTypeConfig) -> Self {
        match config {
            BotTypeConfig::Random => BotType::Random,
            BotTypeConfig::Minimax => BotType::Minimax,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum FirstPlayerConfig {
    Human,
    Computer,
    Random,
}

impl From<FirstPlayerConfig> for FirstPlayerMode {
    fn from(config: FirstPlayerConfig) -> Self {
        match config {
            FirstPlayerConfig::Human => FirstPlayerMode::Human,
            FirstPlayerConfig::Computer => FirstPlayerMode::Computer,
            FirstPlayerConfig::Random => FirstPlayerMode::Random,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub bot_type: BotTypeConfig,
    pub first_player: FirstPlayerConfig,
    #[serde(default = "default_show_index_map")]
    pub show_index_map: bool,
}

fn default_show_index_map() -> bool {
    true
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot_type: BotTypeConfig::Minimax,
            first_player: FirstPlayerConfig::Random,
            show_index_map: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer, YamlConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_client_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_round_trips_through_the_serializer() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();

        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();

        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_default_config_round_trips_through_a_file() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let content_provider = FileContentConfigProvider::new(get_temp_file_path());

        let serialized = serializer.serialize(&default_config).unwrap();
        content_provider.set_config_content(&serialized).unwrap();

        let read_back = content_provider.get_config_content().unwrap().unwrap();
        let deserialized: Config = serializer.deserialize(&read_back).unwrap();

        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_manager_returns_defaults_for_a_missing_file() {
        let manager: ConfigManager<FileContentConfigProvider, Config> =
            ConfigManager::from_yaml_file(&get_temp_file_path());
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_config_manager_persists_and_reloads() {
        let file_path = get_temp_file_path();

        let manager: ConfigManager<FileContentConfigProvider, Config> =
            ConfigManager::from_yaml_file(&file_path);
        let config = Config {
            bot_type: BotTypeConfig::Random,
            first_player: FirstPlayerConfig::Computer,
            show_index_map: false,
        };
        manager.set_config(&config).unwrap();

        let reloaded_manager: ConfigManager<FileContentConfigProvider, Config> =
            ConfigManager::from_yaml_file(&file_path);
        assert_eq!(reloaded_manager.get_config().unwrap(), config);
    }
}
