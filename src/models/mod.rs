// src/models/mod.rs

pub mod api;

use crate::constants;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static LEADING_INT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?\d+)").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub title: String,
    pub duration: String,
    pub total_videos: String,
    pub lessons: Vec<Lesson>,
}

/// 课程详情页的视图模型。所有字符串字段在构建后保证非空。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseViewModel {
    pub id: String,
    pub title: String,
    pub instructor: String,
    pub description: String,
    pub duration: String,
    pub chapters: Vec<Chapter>,
    pub price: String,
}

impl CourseViewModel {
    pub fn section_count(&self) -> usize {
        self.chapters.len()
    }

    pub fn lecture_count(&self) -> usize {
        self.chapters.iter().map(|c| c.lessons.len()).sum()
    }

    /// 划线原价：价格开头的整数加上固定加价。价格不以整数开头时返回 `None`。
    pub fn list_price(&self) -> Option<i64> {
        let caps = LEADING_INT_RE.captures(&self.price)?;
        caps.get(1)?
            .as_str()
            .parse::<i64>()
            .ok()?
            .checked_add(constants::page::LIST_PRICE_MARKUP)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstructorSummary {
    pub name: String,
    pub role: String,
    pub avatar: String,
}

/// 课程列表页中的一张课程卡片
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseSummary {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub category: String,
    pub instructor: InstructorSummary,
}

impl CourseSummary {
    pub fn matches_category(&self, search: &str) -> bool {
        let search = search.to_lowercase();
        search.is_empty() || self.category.to_lowercase().contains(&search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course_with(price: &str, lessons_per_chapter: &[usize]) -> CourseViewModel {
        CourseViewModel {
            id: "1".into(),
            title: "Rust".into(),
            instructor: "Ferris".into(),
            description: "Crabs".into(),
            duration: "1h".into(),
            chapters: lessons_per_chapter
                .iter()
                .enumerate()
                .map(|(i, &n)| Chapter {
                    title: format!("Chapter {}", i + 1),
                    duration: "10m".into(),
                    total_videos: n.to_string(),
                    lessons: (0..n)
                        .map(|j| Lesson {
                            title: format!("L{}", j + 1),
                            video_url: None,
                        })
                        .collect(),
                })
                .collect(),
            price: price.into(),
        }
    }

    #[test]
    fn test_section_and_lecture_counts() {
        let course = course_with("499", &[2, 0, 3]);
        assert_eq!(course.section_count(), 3);
        assert_eq!(course.lecture_count(), 5);

        let empty = course_with("499", &[]);
        assert_eq!(empty.section_count(), 0);
        assert_eq!(empty.lecture_count(), 0);
    }

    #[test]
    fn test_list_price_parses_leading_integer() {
        assert_eq!(course_with("499", &[]).list_price(), Some(1499));
        assert_eq!(course_with(" 2999.50", &[]).list_price(), Some(3999));
        assert_eq!(course_with("1200 INR", &[]).list_price(), Some(2200));
        assert_eq!(course_with("N/A", &[]).list_price(), None);
        assert_eq!(course_with("INR 500", &[]).list_price(), None);
        assert_eq!(course_with("99999999999999999999", &[]).list_price(), None);
    }

    #[test]
    fn test_serialized_field_names() {
        let course = course_with("499", &[1]);
        let json = serde_json::to_value(&course).unwrap();
        assert_eq!(json["chapters"][0]["totalVideos"], "1");
        assert!(json["chapters"][0]["lessons"][0].get("videoUrl").is_none());

        let lesson = Lesson {
            title: "L1".into(),
            video_url: Some("https://video.test/l1.mp4".into()),
        };
        let json = serde_json::to_value(&lesson).unwrap();
        assert_eq!(json["videoUrl"], "https://video.test/l1.mp4");
        assert!(json.get("video_url").is_none());
    }

    #[test]
    fn test_category_match_is_case_insensitive() {
        let summary = CourseSummary {
            id: "1".into(),
            title: "DSA".into(),
            thumbnail: "-".into(),
            category: "Computer Science".into(),
            instructor: InstructorSummary {
                name: "S".into(),
                role: "-".into(),
                avatar: "-".into(),
            },
        };
        assert!(summary.matches_category(""));
        assert!(summary.matches_category("science"));
        assert!(summary.matches_category("COMPUTER"));
        assert!(!summary.matches_category("civil"));
    }
}
