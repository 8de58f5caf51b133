use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::sync::Mutex;

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

pub trait ConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, String>;
    fn set_config_content(&self, content: &str) -> Result<(), String>;
}

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for YamlConfigSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
    }
}

/// Reads and writes the config text at a path. A missing file reads as `None`.
pub struct FileContentConfigProvider {
    file_path: String,
}

impl FileContentConfigProvider {
    pub fn new(file_path: String) -> Self {
        Self { file_path }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(self.file_path.as_str()) {
            Ok(content) => Ok(Some(content)),
            Err(err) => match err.kind() {
                ErrorKind::NotFound => Ok(None),
                _ => Err(format!("Failed to read config file: {}", err)),
            },
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        std::fs::write(self.file_path.as_str(), content)
            .map_err(|e| format!("Failed to write config file: {}", e))
    }
}

pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path.to_string()),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Mutex::new(None),
            config_content_provider,
            config_serializer,
        }
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    /// Cached config, loaded and validated on first call. Falls back to `TConfig::default()`
    /// when there is no stored content.
    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config lock poisoned".to_string())?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        if let Some(config_data) = self.config_content_provider.get_config_content()? {
            let config: TConfig = self.config_serializer.deserialize(&config_data)?;

            config
                .validate()
                .map_err(|e| format!("Config validation error: {}", e))?;

            *current = Some(config.clone());
            return Ok(config);
        }

        Ok(TConfig::default())
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;

        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config lock poisoned".to_string())?;
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    struct SampleConfig {
        delay_ms: u32,
    }

    impl Validate for SampleConfig {
        fn validate(&self) -> Result<(), String> {
            if self.delay_ms > 1000 {
                return Err("delay_ms must not exceed 1000".to_string());
            }
            Ok(())
        }
    }

    struct MemoryContentProvider {
        content: RefCell<Option<String>>,
    }

    impl MemoryContentProvider {
        fn new(content: Option<&str>) -> Self {
            Self {
                content: RefCell::new(content.map(str::to_string)),
            }
        }
    }

    impl ConfigContentProvider for MemoryContentProvider {
        fn get_config_content(&self) -> Result<Option<String>, String> {
            Ok(self.content.borrow().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), String> {
            *self.content.borrow_mut() = Some(content.to_string());
            Ok(())
        }
    }

    fn manager(content: Option<&str>) -> ConfigManager<MemoryContentProvider, SampleConfig> {
        ConfigManager::new(MemoryContentProvider::new(content), YamlConfigSerializer::new())
    }

    #[test]
    fn test_missing_content_gives_default() {
        assert_eq!(manager(None).get_config(), Ok(SampleConfig::default()));
    }

    #[test]
    fn test_stored_content_is_parsed() {
        assert_eq!(
            manager(Some("delay_ms: 250\n")).get_config(),
            Ok(SampleConfig { delay_ms: 250 })
        );
    }

    #[test]
    fn test_invalid_content_is_rejected() {
        let result = manager(Some("delay_ms: 5000\n")).get_config();
        assert!(result.unwrap_err().starts_with("Config validation error"));
    }

    #[test]
    fn test_malformed_content_is_rejected() {
        let result = manager(Some("delay_ms: [oops")).get_config();
        assert!(result.unwrap_err().starts_with("Failed to deserialize config"));
    }

    #[test]
    fn test_set_config_validates_and_caches() {
        let manager = manager(None);
        assert!(manager.set_config(&SampleConfig { delay_ms: 2000 }).is_err());
        manager.set_config(&SampleConfig { delay_ms: 10 }).unwrap();
        assert_eq!(manager.get_config(), Ok(SampleConfig { delay_ms: 10 }));
    }

    #[test]
    fn test_file_provider_missing_file_reads_none() {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("missing_tictactoe_config_{}.yaml", random_number));
        let provider = FileContentConfigProvider::new(path.to_str().unwrap().to_string());
        assert_eq!(provider.get_config_content(), Ok(None));
    }
}
