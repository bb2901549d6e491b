//! 照片資訊解析模組
//!
//! 負責驗證每一行照片資訊並拆解出檔名、副檔名、城市與拍攝時間。
//! 格式為 `{name}.{extension}, {city}, yyyy-mm-dd hh:mm:ss`

use super::error::OrganizeError;
use crate::config::GrammarMode;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::{Captures, Regex};
use std::fmt;
use std::sync::LazyLock;

/// 寬鬆格式：分隔字元可為任意字元，小時接受 24，分秒接受 60
static REGEX_LENIENT_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^([a-zA-Z]{1,20}).(jpg|jpeg|png), ([A-Z][a-z]{0,19}), ",
        r"(20[01][0-9]|2020)-(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01]) ",
        r"([01][0-9]|2[0-4]):([0-5][0-9]|60):([0-5][0-9]|60)$",
    ))
    .expect("Invalid regex")
});

static REGEX_STRICT_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^([a-zA-Z]{1,20})\.(jpg|jpeg|png), ([A-Z][a-z]{0,19}), ",
        r"(20[01][0-9]|2020)-(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01]) ",
        r"([01][0-9]|2[0-3]):([0-5][0-9]):([0-5][0-9])$",
    ))
    .expect("Invalid regex")
});

/// 支援的照片副檔名
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhotoExtension {
    Jpg,
    Jpeg,
    Png,
}

impl PhotoExtension {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Jpg => "jpg",
            Self::Jpeg => "jpeg",
            Self::Png => "png",
        }
    }

    fn from_capture(ext: &str) -> Option<Self> {
        match ext {
            "jpg" => Some(Self::Jpg),
            "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }
}

impl fmt::Display for PhotoExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 拍攝時間
///
/// 保留解析出的原始數值。欄位順序即為比較順序，因此排序結果等同時間先後。
/// 寬鬆格式下可能出現 24 時、60 分等非真實時間，所以不直接存成 `NaiveDateTime`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TakenAt {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl TakenAt {
    /// 轉換為真實的日期時間，非真實時間回傳 `None`
    #[must_use]
    pub fn to_naive_datetime(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )?;
        let time = NaiveTime::from_hms_opt(
            u32::from(self.hour),
            u32::from(self.minute),
            u32::from(self.second),
        )?;
        Some(NaiveDateTime::new(date, time))
    }

    fn from_captures(caps: &Captures<'_>) -> Option<Self> {
        Some(Self {
            year: caps.get(4)?.as_str().parse().ok()?,
            month: caps.get(5)?.as_str().parse().ok()?,
            day: caps.get(6)?.as_str().parse().ok()?,
            hour: caps.get(7)?.as_str().parse().ok()?,
            minute: caps.get(8)?.as_str().parse().ok()?,
            second: caps.get(9)?.as_str().parse().ok()?,
        })
    }
}

impl fmt::Display for TakenAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// 解析後的照片資訊
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPhoto {
    /// 原始檔名（不含副檔名）
    pub name: String,
    pub extension: PhotoExtension,
    pub city: String,
    pub taken_at: TakenAt,
    /// 在輸入中的位置（從 0 開始）
    pub original_index: usize,
}

/// 照片資訊解析器
#[derive(Debug, Clone, Copy)]
pub struct PhotoParser {
    grammar_mode: GrammarMode,
    regex_format: &'static Regex,
}

impl Default for PhotoParser {
    fn default() -> Self {
        Self::new(GrammarMode::default())
    }
}

impl PhotoParser {
    #[must_use]
    pub fn new(grammar_mode: GrammarMode) -> Self {
        let regex_format = match grammar_mode {
            GrammarMode::Lenient => &*REGEX_LENIENT_FORMAT,
            GrammarMode::Strict => &*REGEX_STRICT_FORMAT,
        };

        Self {
            grammar_mode,
            regex_format,
        }
    }

    #[must_use]
    pub const fn grammar_mode(&self) -> GrammarMode {
        self.grammar_mode
    }

    /// 解析一行照片資訊
    ///
    /// # Arguments
    /// * `line` - 原始輸入行
    /// * `original_index` - 該行在輸入中的位置
    ///
    /// # Errors
    /// 整行不符合格式時回傳 [`OrganizeError::Format`]，訊息中保留原始行內容
    pub fn parse(&self, line: &str, original_index: usize) -> Result<ParsedPhoto, OrganizeError> {
        let caps = self
            .regex_format
            .captures(line)
            .ok_or_else(|| OrganizeError::format(line))?;

        let extension = caps
            .get(2)
            .and_then(|m| PhotoExtension::from_capture(m.as_str()))
            .ok_or_else(|| OrganizeError::format(line))?;
        let taken_at = TakenAt::from_captures(&caps).ok_or_else(|| OrganizeError::format(line))?;

        if self.grammar_mode == GrammarMode::Strict && taken_at.to_naive_datetime().is_none() {
            return Err(OrganizeError::format(line));
        }

        Ok(ParsedPhoto {
            name: caps[1].to_string(),
            extension,
            city: caps[3].to_string(),
            taken_at,
            original_index,
        })
    }
}
