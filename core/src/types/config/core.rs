use std::path::PathBuf;

/// Core configuration for opening on-disk storage.
#[derive(Clone, Debug)]
pub struct Config {
    pub base_path: PathBuf,
}

impl Config {
    pub fn db_path(&self) -> PathBuf {
        self.base_path.join("tiklist.redb")
    }

    pub fn app_config_path(&self) -> PathBuf {
        super::AppConfig::path(&self.base_path)
    }
}
