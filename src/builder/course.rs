// src/builder/course.rs

use super::{CourseSource, normalize::text_or};
use crate::{
    constants::{api::fields, fallback},
    models::{
        Chapter, CourseViewModel, Lesson,
        api::{RawCourseRecord, RawSection, find_course_record},
    },
};
use log::{debug, info, warn};
use std::sync::Arc;

pub struct CourseViewModelBuilder {
    source: Arc<dyn CourseSource>,
}

impl CourseViewModelBuilder {
    pub fn new(source: Arc<dyn CourseSource>) -> Self {
        Self { source }
    }

    /// 按 ID 构建课程视图模型。
    ///
    /// 找不到记录与数据服务不可用都返回 `None`，调用方把它当作正常的
    /// “课程不存在”状态来显示。失败原因只写入日志。
    pub async fn build(&self, identifier: &str) -> Option<CourseViewModel> {
        if identifier.is_empty() {
            warn!("课程 ID 为空，按课程不存在处理");
            return None;
        }
        info!("开始构建课程视图模型, ID: {}", identifier);
        let body = match self.source.fetch_course_data().await {
            Ok(body) => body,
            Err(e) => {
                warn!("获取课程数据失败，按课程不存在处理: {}", e);
                return None;
            }
        };

        let Some(record) = find_course_record(&body, identifier) else {
            info!("课程数据中没有 ID 为 '{}' 的记录", identifier);
            return None;
        };

        let course = normalize_course(record, identifier);
        debug!(
            "课程 '{}' 包含 {} 个章节, {} 节课",
            course.id,
            course.section_count(),
            course.lecture_count()
        );
        Some(course)
    }
}

/// 逐字段构建视图模型，缺失或为假值的字段替换为默认文本
pub fn normalize_course(record: RawCourseRecord<'_>, identifier: &str) -> CourseViewModel {
    CourseViewModel {
        id: text_or(record.field(fields::ID), identifier),
        title: text_or(record.field(fields::COURSE_NAME), fallback::TITLE),
        instructor: text_or(record.field(fields::INSTRUCTOR), fallback::INSTRUCTOR),
        description: text_or(record.field(fields::DESCRIPTION), fallback::DESCRIPTION),
        duration: text_or(record.field(fields::DURATION), fallback::NOT_AVAILABLE),
        chapters: record.sections().into_iter().map(normalize_chapter).collect(),
        price: text_or(record.field(fields::PRICE), fallback::NOT_AVAILABLE),
    }
}

fn normalize_chapter(section: RawSection<'_>) -> Chapter {
    match section {
        RawSection::Tuple {
            title,
            duration,
            total_videos,
            lessons,
        } => Chapter {
            title: text_or(title, fallback::SECTION_TITLE),
            duration: text_or(duration, fallback::NOT_AVAILABLE),
            total_videos: text_or(total_videos, fallback::NOT_AVAILABLE),
            lessons: lessons
                .iter()
                .map(|lesson| Lesson {
                    title: text_or(Some(lesson), fallback::LESSON_TITLE),
                    video_url: None,
                })
                .collect(),
        },
        RawSection::Malformed => {
            warn!("章节条目不是数组，使用默认章节");
            Chapter {
                title: fallback::SECTION_TITLE.to_string(),
                duration: fallback::NOT_AVAILABLE.to_string(),
                total_videos: fallback::NOT_AVAILABLE.to_string(),
                lessons: Vec::new(),
            }
        }
    }
}
