//! 序號分配模組
//!
//! 每個城市群組依拍攝時間排序後給予補零的流水號

use super::city_grouper::CityGroup;
use super::photo_parser::{PhotoExtension, TakenAt};

/// 重新命名後的照片
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamedPhoto {
    /// 在輸入中的位置
    pub original_index: usize,
    pub city: String,
    /// 城市內的流水號（從 1 開始）
    pub sequence: usize,
    pub taken_at: TakenAt,
    pub new_name: String,
}

/// 剛好能表示 `group_size` 的十進位位數
#[must_use]
pub fn digit_width(group_size: usize) -> usize {
    group_size.checked_ilog10().map_or(1, |log| log as usize + 1)
}

/// 產生新檔名，例如 `Krakow01.jpg`
#[must_use]
pub fn format_new_filename(
    city: &str,
    sequence: usize,
    width: usize,
    extension: PhotoExtension,
) -> String {
    format!("{city}{sequence:0width$}.{extension}")
}

/// 依拍攝時間排序群組並分配流水號
///
/// 使用穩定排序，拍攝時間相同時保留原始輸入順序
#[must_use]
pub fn assign_sequence(group: CityGroup) -> Vec<RenamedPhoto> {
    let width = digit_width(group.len());
    let CityGroup { city, mut photos } = group;

    photos.sort_by_key(|photo| photo.taken_at);

    photos
        .into_iter()
        .enumerate()
        .map(|(i, photo)| {
            let sequence = i + 1;
            RenamedPhoto {
                original_index: photo.original_index,
                city: city.clone(),
                sequence,
                taken_at: photo.taken_at,
                new_name: format_new_filename(&city, sequence, width, photo.extension),
            }
        })
        .collect()
}
