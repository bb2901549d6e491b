//! 城市分組器
//!
//! 驗證照片數量，解析每一行後依拍攝城市分組

use super::error::OrganizeError;
use super::photo_parser::{ParsedPhoto, PhotoParser};
use log::debug;
use std::collections::HashMap;

/// 同一城市的照片群組
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityGroup {
    pub city: String,
    pub photos: Vec<ParsedPhoto>,
}

impl CityGroup {
    #[must_use]
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}

/// 驗證照片數量是否在 `1..=max_photos` 之間
///
/// # Errors
/// 數量超出範圍時回傳 [`OrganizeError::Count`]
pub fn validate_photo_count(count: usize, max_photos: usize) -> Result<(), OrganizeError> {
    if (1..=max_photos).contains(&count) {
        Ok(())
    } else {
        Err(OrganizeError::Count {
            max: max_photos,
            actual: count,
        })
    }
}

/// 城市分組器
pub struct CityGrouper {
    parser: PhotoParser,
    max_photos: usize,
}

impl CityGrouper {
    #[must_use]
    pub const fn new(parser: PhotoParser, max_photos: usize) -> Self {
        Self { parser, max_photos }
    }

    /// 解析並分組
    ///
    /// 先檢查總數，再逐行解析；遇到第一個格式錯誤的行即中止。
    /// 回傳的群組依城市首次出現的順序排列。
    ///
    /// # Errors
    /// 數量錯誤或任一行格式錯誤
    pub fn group(&self, lines: &[&str]) -> Result<Vec<CityGroup>, OrganizeError> {
        validate_photo_count(lines.len(), self.max_photos)?;

        let mut groups: Vec<CityGroup> = Vec::new();
        let mut group_index: HashMap<String, usize> = HashMap::new();

        for (index, line) in lines.iter().enumerate() {
            let photo = self.parser.parse(line, index)?;

            match group_index.get(&photo.city) {
                Some(&position) => groups[position].photos.push(photo),
                None => {
                    group_index.insert(photo.city.clone(), groups.len());
                    groups.push(CityGroup {
                        city: photo.city.clone(),
                        photos: vec![photo],
                    });
                }
            }
        }

        debug!(
            "Grouped {} photos into {} cities",
            lines.len(),
            groups.len()
        );

        Ok(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_NUM_OF_PHOTOS;

    fn grouper() -> CityGrouper {
        CityGrouper::new(PhotoParser::default(), MAX_NUM_OF_PHOTOS)
    }

    #[test]
    fn test_validate_photo_count_range() {
        assert!(validate_photo_count(1, 100).is_ok());
        assert!(validate_photo_count(100, 100).is_ok());
        assert_eq!(
            validate_photo_count(0, 100),
            Err(OrganizeError::Count { max: 100, actual: 0 })
        );
        assert_eq!(
            validate_photo_count(101, 100),
            Err(OrganizeError::Count {
                max: 100,
                actual: 101
            })
        );
    }

    #[test]
    fn test_group_by_city_in_first_appearance_order() {
        let lines = [
            "myFriends.png, Krakow, 2013-09-05 14:07:13",
            "Mike.jpeg, London, 2015-06-20 15:13:22",
            "photo.jpg, Krakow, 2013-09-05 14:08:15",
        ];
        let groups = grouper().group(&lines).unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].city, "Krakow");
        assert_eq!(groups[0].len(), 2);
        assert_eq!(groups[1].city, "London");
        assert_eq!(groups[1].len(), 1);

        let krakow_indices: Vec<usize> =
            groups[0].photos.iter().map(|p| p.original_index).collect();
        assert_eq!(krakow_indices, vec![0, 2]);
    }

    #[test]
    fn test_group_checks_count_before_format() {
        let lines = vec!["not a photo"; 101];
        let err = grouper().group(&lines).unwrap_err();
        assert!(matches!(err, OrganizeError::Count { actual: 101, .. }));
    }

    #[test]
    fn test_group_stops_at_first_bad_line() {
        let lines = [
            "photo.jpg, Krakow, 2013-09-05 14:08:15",
            "photo.gif, Krakow, 2013-09-05 14:08:15",
            "photo.bmp, Krakow, 2013-09-05 14:08:15",
        ];
        let err = grouper().group(&lines).unwrap_err();
        assert_eq!(
            err,
            OrganizeError::format("photo.gif, Krakow, 2013-09-05 14:08:15")
        );
    }

    #[test]
    fn test_group_with_custom_maximum() {
        let grouper = CityGrouper::new(PhotoParser::default(), 2);
        let lines = [
            "a.jpg, Krakow, 2013-09-05 14:08:15",
            "b.jpg, Krakow, 2013-09-05 14:08:16",
            "c.jpg, Krakow, 2013-09-05 14:08:17",
        ];
        let err = grouper.group(&lines).unwrap_err();
        assert_eq!(err.to_string(), "Number of photos should be in 1-2 range.");
    }
}
