use super::environment::AppConfig;

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: String,
}

impl StorageConfig {
    pub fn from_app(config: &AppConfig) -> Self {
        Self {
            data_dir: config.data_dir.clone(),
        }
    }
}
