// src/utils.rs

use crate::constants;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// 路径段中需要转义的字符
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// 课程详情页的站内路径，形如 `/courses/{id}`
pub fn course_path(id: &str) -> String {
    format!(
        "{}{}",
        constants::COURSE_PATH_PREFIX,
        utf8_percent_encode(id, PATH_SEGMENT)
    )
}

/// 按终端显示宽度截断 (非 ASCII 字符按 2 列计)
pub fn truncate_text(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut end_pos = 0;
    for (i, c) in text.char_indices() {
        width += if c.is_ascii() { 1 } else { 2 };
        if width > max_width.saturating_sub(3) {
            end_pos = i;
            break;
        }
    }
    if end_pos == 0 {
        text.to_string()
    } else {
        format!("{}...", &text[..end_pos])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_path_escapes_segment() {
        assert_eq!(course_path("42"), "/courses/42");
        assert_eq!(course_path("intro to/rust?"), "/courses/intro%20to%2Frust%3F");
        assert_eq!(course_path("数据"), "/courses/%E6%95%B0%E6%8D%AE");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("abcdefghijkl", 10), "abcdefg...");
        assert_eq!(truncate_text("数据结构与算法", 10), "数据结...");
    }
}
