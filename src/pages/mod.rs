// src/pages/mod.rs

//! 终端页面渲染。页面只消费视图模型，不访问网络。

pub mod detail;
pub mod listing;

use crate::config::AppConfig;

/// 页面渲染所需的外部信息
#[derive(Debug, Clone)]
pub struct PageContext {
    pub checkout_url: String,
}

impl PageContext {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            checkout_url: config.checkout_url.clone(),
        }
    }
}
