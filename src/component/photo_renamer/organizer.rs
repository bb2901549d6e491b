//! 照片整理器
//!
//! 串接解析、分組、排序與組裝，將整批照片資訊轉換為新檔名

use super::city_grouper::CityGrouper;
use super::error::OrganizeError;
use super::photo_parser::PhotoParser;
use super::sequence_assigner::{RenamedPhoto, assign_sequence};
use crate::config::UserSettings;
use crate::tools::split_lines;
use log::debug;

/// 一次整理的完整結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    /// 原始輸入行
    pub original_lines: Vec<String>,
    /// 依原始順序排列的重新命名結果
    pub renamed: Vec<RenamedPhoto>,
}

impl RenamePlan {
    #[must_use]
    pub fn len(&self) -> usize {
        self.renamed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.renamed.is_empty()
    }

    /// 成對列出舊行與新檔名
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &RenamedPhoto)> {
        self.original_lines
            .iter()
            .map(String::as_str)
            .zip(self.renamed.iter())
    }

    /// 以換行串接所有新檔名
    #[must_use]
    pub fn to_output(&self) -> String {
        self.renamed
            .iter()
            .map(|photo| photo.new_name.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// 照片整理器
#[derive(Debug, Clone, Copy)]
pub struct PhotoOrganizer {
    parser: PhotoParser,
    max_photos: usize,
}

impl Default for PhotoOrganizer {
    fn default() -> Self {
        Self::new(&UserSettings::default())
    }
}

impl PhotoOrganizer {
    #[must_use]
    pub fn new(settings: &UserSettings) -> Self {
        Self {
            parser: PhotoParser::new(settings.grammar_mode),
            max_photos: settings.max_photos,
        }
    }

    #[must_use]
    pub const fn max_photos(&self) -> usize {
        self.max_photos
    }

    /// 建立重新命名計畫
    ///
    /// # Errors
    /// 照片數量不在範圍內，或任一行格式錯誤
    pub fn plan(&self, collection: &str) -> Result<RenamePlan, OrganizeError> {
        let lines = split_lines(collection);
        let groups = CityGrouper::new(self.parser, self.max_photos).group(&lines)?;

        let mut renamed: Vec<RenamedPhoto> = groups.into_iter().flat_map(assign_sequence).collect();
        renamed.sort_by_key(|photo| photo.original_index);

        debug_assert_eq!(renamed.len(), lines.len());
        debug!("Renamed {} photos", renamed.len());

        Ok(RenamePlan {
            original_lines: lines.into_iter().map(str::to_string).collect(),
            renamed,
        })
    }

    /// 整理照片資訊，回傳以換行分隔的新檔名
    ///
    /// # Errors
    /// 照片數量不在範圍內，或任一行格式錯誤
    pub fn organize(&self, collection: &str) -> Result<String, OrganizeError> {
        self.plan(collection).map(|plan| plan.to_output())
    }
}

/// 以預設設定整理照片資訊
///
/// # Errors
/// 照片數量不在 1-100 之間，或任一行格式錯誤
pub fn organize(collection: &str) -> Result<String, OrganizeError> {
    PhotoOrganizer::default().organize(collection)
}
