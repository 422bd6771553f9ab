// src/client.rs

use crate::{config::AppConfig, error::*};
use log::{debug, trace};
use reqwest::{IntoUrl, Response};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone)]
pub struct RobustClient {
    pub client: ClientWithMiddleware,
    config: Arc<AppConfig>,
}

impl RobustClient {
    pub fn new(config: Arc<AppConfig>) -> AppResult<Self> {
        let retry_policy =
            ExponentialBackoff::builder().build_with_max_retries(config.max_retries);
        let client = ClientBuilder::new(
            reqwest::Client::builder()
                .user_agent(config.user_agent.clone())
                .connect_timeout(config.connect_timeout)
                .timeout(config.timeout)
                .build()?,
        )
        .with(RetryTransientMiddleware::new_with_policy(retry_policy))
        .build();

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub async fn get<T: IntoUrl>(&self, url: T) -> AppResult<Response> {
        let res = self.client.get(url).send().await?;
        trace!("GET {} -> {}", res.url(), res.status());
        Ok(res.error_for_status()?)
    }

    /// 请求并解析 JSON。响应体不是合法 JSON 时返回 `ApiParseFailed`。
    pub async fn fetch_json<T: IntoUrl>(&self, url: T) -> AppResult<Value> {
        let res = self.get(url).await?;
        let url = res.url().to_string();
        let body = res.text().await?;
        debug!("从 '{}' 收到 {} 字节", url, body.len());
        serde_json::from_str(&body).map_err(|source| AppError::ApiParseFailed { url, source })
    }
}
