// src/builder/mod.rs

pub mod catalog;
pub mod course;
pub mod normalize;

use crate::{client::RobustClient, error::*};
use async_trait::async_trait;
use serde_json::Value;

/// 外部课程数据服务。每次调用都完整拉取一次集合，不做缓存。
#[async_trait]
pub trait CourseSource: Send + Sync {
    /// 详情接口，响应形如 `{ "result": [...] }`
    async fn fetch_course_data(&self) -> AppResult<Value>;
    /// 列表接口
    async fn fetch_catalog(&self) -> AppResult<Value>;
}

#[async_trait]
impl CourseSource for RobustClient {
    async fn fetch_course_data(&self) -> AppResult<Value> {
        self.fetch_json(self.config().course_data_url.clone()).await
    }

    async fn fetch_catalog(&self) -> AppResult<Value> {
        self.fetch_json(self.config().courses_url.clone()).await
    }
}
