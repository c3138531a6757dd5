use std::io::ErrorKind;

use super::ConfigError;

pub trait ConfigContentProvider {
    /// `Ok(None)` when there is no stored config yet.
    fn get_config_content(&self) -> Result<Option<String>, ConfigError>;
    fn set_config_content(&self, content: &str) -> Result<(), ConfigError>;
}

pub struct FileContentConfigProvider {
    file_path: String,
}

impl FileContentConfigProvider {
    pub fn new(file_path: String) -> Self {
        Self { file_path }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ConfigError::Read {
                path: self.file_path.clone(),
                source,
            }),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
        std::fs::write(&self.file_path, content).map_err(|source| ConfigError::Write {
            path: self.file_path.clone(),
            source,
        })
    }
}
