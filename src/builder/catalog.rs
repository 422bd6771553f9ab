// src/builder/catalog.rs

use super::{CourseSource, normalize::text_or};
use crate::{
    constants::{api::fields, fallback},
    error::AppResult,
    models::{CourseSummary, InstructorSummary, api::catalog_entries},
};
use log::{debug, info, trace};
use serde_json::Value;
use std::sync::Arc;

pub struct CourseCatalog {
    source: Arc<dyn CourseSource>,
}

impl CourseCatalog {
    pub fn new(source: Arc<dyn CourseSource>) -> Self {
        Self { source }
    }

    /// 拉取课程列表并按分类过滤。与详情页不同，列表请求失败会作为错误返回。
    pub async fn fetch(&self, search: &str) -> AppResult<Vec<CourseSummary>> {
        let body = self.source.fetch_catalog().await?;
        let entries = catalog_entries(&body);
        debug!("课程列表接口返回 {} 个条目", entries.len());

        let courses: Vec<CourseSummary> = entries
            .iter()
            .filter_map(normalize_summary)
            .filter(|course| course.matches_category(search))
            .collect();

        info!(
            "分类过滤 '{}' 后剩余 {} 门课程",
            search,
            courses.len()
        );
        Ok(courses)
    }
}

/// 非对象条目直接丢弃
pub fn normalize_summary(entry: &Value) -> Option<CourseSummary> {
    if !entry.is_object() {
        trace!("忽略非对象的课程条目: {}", entry);
        return None;
    }
    let instructor = entry.get(fields::INSTRUCTOR_OBJ);
    let instructor_field = |key: &str| instructor.and_then(|i| i.get(key));

    Some(CourseSummary {
        id: text_or(entry.get(fields::ID), fallback::PLACEHOLDER),
        title: text_or(entry.get(fields::TITLE), fallback::LISTING_TITLE),
        thumbnail: text_or(entry.get(fields::THUMBNAIL), fallback::PLACEHOLDER),
        category: text_or(entry.get(fields::CATEGORY), fallback::CATEGORY),
        instructor: InstructorSummary {
            name: text_or(instructor_field(fields::NAME), fallback::INSTRUCTOR),
            role: text_or(instructor_field(fields::ROLE), fallback::PLACEHOLDER),
            avatar: text_or(instructor_field(fields::AVATAR), fallback::PLACEHOLDER),
        },
    })
}
