use crate::config::types::{Config, SETTINGS_FILE_NAME, UserSettings};
use anyhow::{Context, Result, bail};
use log::warn;
use std::fs;
use std::path::Path;

impl Config {
    /// 從目前工作目錄的 settings.json 載入，失敗時使用預設值
    pub fn new() -> Result<Self> {
        let settings = Self::load_settings(Path::new(SETTINGS_FILE_NAME)).unwrap_or_else(|e| {
            warn!("Falling back to default settings: {e:#}");
            UserSettings::default()
        });

        Ok(Self { settings })
    }

    /// 從指定路徑載入設定
    pub fn load_from(path: &Path) -> Result<Self> {
        Ok(Self {
            settings: Self::load_settings(path)?,
        })
    }

    fn load_settings(path: &Path) -> Result<UserSettings> {
        if !path.exists() {
            return Ok(UserSettings::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        let settings: UserSettings = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))?;

        if settings.max_photos == 0 {
            bail!("max_photos 必須大於 0: {}", path.display());
        }

        Ok(settings)
    }
}
