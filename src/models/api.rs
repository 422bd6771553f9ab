// src/models/api.rs

//! 外部课程数据服务返回的原始 JSON 视图。
//!
//! 服务端不保证任何结构，这里只做只读访问和按位置的元组解码；
//! 默认值替换在 `builder::normalize` 中完成。

use crate::constants::api::fields;
use serde_json::Value;

/// 一条原始课程记录。只有 JSON 对象才能构成记录。
#[derive(Debug, Clone, Copy)]
pub struct RawCourseRecord<'a>(&'a Value);

impl<'a> RawCourseRecord<'a> {
    pub fn new(value: &'a Value) -> Option<Self> {
        value.is_object().then_some(Self(value))
    }

    pub fn field(&self, key: &str) -> Option<&'a Value> {
        self.0.get(key)
    }

    /// 仅当 `id` 是 JSON 字符串时返回，数字 ID 不参与严格相等比较
    pub fn id(&self) -> Option<&'a str> {
        self.field(fields::ID).and_then(Value::as_str)
    }

    /// `course_sections` 缺失或不是数组时为空
    pub fn sections(&self) -> Vec<RawSection<'a>> {
        self.field(fields::SECTIONS)
            .and_then(Value::as_array)
            .map(|sections| sections.iter().map(RawSection::decode).collect())
            .unwrap_or_default()
    }
}

/// `[sectionTitle, sectionDuration, videoCount, lessonTitles]` 元组。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawSection<'a> {
    Tuple {
        title: Option<&'a Value>,
        duration: Option<&'a Value>,
        total_videos: Option<&'a Value>,
        lessons: &'a [Value],
    },
    /// 不是数组的章节条目，按“全部缺省”处理
    Malformed,
}

impl<'a> RawSection<'a> {
    pub fn decode(value: &'a Value) -> Self {
        let Some(items) = value.as_array() else {
            return Self::Malformed;
        };
        Self::Tuple {
            title: items.first(),
            duration: items.get(1),
            total_videos: items.get(2),
            lessons: items
                .get(3)
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or_default(),
        }
    }
}

/// 在 `{ "result": [...] }` 中查找第一条 `id` 与给定值严格相等的记录
pub fn find_course_record<'a>(body: &'a Value, identifier: &str) -> Option<RawCourseRecord<'a>> {
    body.get(fields::RESULT)?
        .as_array()?
        .iter()
        .filter_map(RawCourseRecord::new)
        .find(|record| record.id() == Some(identifier))
}

/// 列表接口可能直接返回数组，也可能包在 `result` 中
pub fn catalog_entries(body: &Value) -> &[Value] {
    body.as_array()
        .or_else(|| body.get(fields::RESULT).and_then(Value::as_array))
        .map(Vec::as_slice)
        .unwrap_or_default()
}
