//! 照片整理錯誤類型

use thiserror::Error;

/// 整理照片時可能發生的錯誤
///
/// 兩種錯誤都會直接中止整理，不會產生部分輸出
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrganizeError {
    /// 照片數量不在允許範圍內
    #[error("Number of photos should be in 1-{max} range.")]
    Count { max: usize, actual: usize },

    /// 某一行不符合照片資訊格式
    #[error("{line} is not a valid photo information format.")]
    Format { line: String },
}

impl OrganizeError {
    pub fn format(line: &str) -> Self {
        Self::Format {
            line: line.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_error_message() {
        let err = OrganizeError::Count {
            max: 100,
            actual: 101,
        };
        assert_eq!(err.to_string(), "Number of photos should be in 1-100 range.");
    }

    #[test]
    fn test_format_error_keeps_line_verbatim() {
        let err = OrganizeError::format("photo.gif, Krakow, 2013-09-05 14:08:15");
        assert_eq!(
            err.to_string(),
            "photo.gif, Krakow, 2013-09-05 14:08:15 is not a valid photo information format."
        );
    }
}
