/// 以 `\n` 切分輸入，並移除結尾的空行
///
/// 中間的空行會保留，由後續的格式驗證處理。
/// 空字串或只有換行的輸入會得到空列表。
#[must_use]
pub fn split_lines(collection: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = collection.split('\n').collect();

    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_simple() {
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_lines_drops_trailing_empty() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\n\n\n"), vec!["a"]);
    }

    #[test]
    fn test_split_lines_keeps_inner_empty() {
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_split_lines_empty_input() {
        assert!(split_lines("").is_empty());
        assert!(split_lines("\n\n").is_empty());
    }

    #[test]
    fn test_split_lines_keeps_carriage_return() {
        assert_eq!(split_lines("a\r\nb"), vec!["a\r", "b"]);
    }
}
