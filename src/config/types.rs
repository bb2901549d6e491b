use serde::{Deserialize, Serialize};
use std::fmt;

/// 一次最多可整理的照片數量
pub const MAX_NUM_OF_PHOTOS: usize = 100;

/// 設定檔名稱（位於目前工作目錄）
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// 照片資訊格式的驗證模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrammarMode {
    /// 副檔名前可為任意字元，接受 24 時與 60 分秒，不檢查每月天數
    #[default]
    Lenient,
    /// 副檔名前必須是 `.`，且日期時間必須真實存在
    Strict,
}

impl GrammarMode {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lenient => "lenient",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for GrammarMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub max_photos: usize,
    pub grammar_mode: GrammarMode,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            max_photos: MAX_NUM_OF_PHOTOS,
            grammar_mode: GrammarMode::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub settings: UserSettings,
}
