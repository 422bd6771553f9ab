// src/config.rs

pub mod session;

use self::session::load_or_create_external_config;
use crate::{
    cli::Cli,
    constants,
    error::{AppError, AppResult},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NetworkConfig {
    pub base_url: Option<String>,
    pub connect_timeout_secs: Option<u64>,
    pub timeout_secs: Option<u64>,
    pub max_retries: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    #[serde(default = "default_course_data_endpoint")]
    pub course_data: String,
    #[serde(default = "default_courses_endpoint")]
    pub courses: String,
}

fn default_course_data_endpoint() -> String {
    constants::api::endpoints::COURSE_DATA.to_string()
}

fn default_courses_endpoint() -> String {
    constants::api::endpoints::COURSES.to_string()
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            course_data: default_course_data_endpoint(),
            courses: default_courses_endpoint(),
        }
    }
}

/// 配置文件 (`config.json`) 的磁盘格式
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub endpoints: EndpointConfig,
    #[serde(default)]
    pub checkout_url: Option<String>,
}

impl ExternalConfig {
    pub(crate) fn default_app_config() -> Self {
        // 本地开发服务器的默认值；不重试，单次请求失败即视为课程不存在
        let network_config = NetworkConfig {
            base_url: Some(constants::DEFAULT_BASE_URL.into()),
            connect_timeout_secs: Some(10),
            timeout_secs: Some(30),
            max_retries: Some(0),
        };

        Self {
            user: None,
            network: network_config,
            endpoints: EndpointConfig::default(),
            checkout_url: Some(constants::DEFAULT_CHECKOUT_URL.into()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: Url,
    pub course_data_url: Url,
    pub courses_url: Url,
    pub checkout_url: String,
    pub user_agent: String,
    pub connect_timeout: Duration,
    pub timeout: Duration,
    pub max_retries: u32,
    pub configured_user: Option<String>,
}

impl AppConfig {
    pub fn new(args: &Cli) -> AppResult<Self> {
        let external_config = load_or_create_external_config(args.config.as_deref())?;
        Self::from_external(external_config, args.base_url.as_deref())
    }

    /// 将配置文件内容与命令行覆盖项合并，并校验所有 URL
    pub fn from_external(
        external_config: ExternalConfig,
        base_url_override: Option<&str>,
    ) -> AppResult<Self> {
        let raw_base = base_url_override
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
            .or(external_config.network.base_url)
            .unwrap_or_else(|| constants::DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(raw_base.trim())?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::Config(format!(
                "API 地址 '{}' 不能作为基础 URL",
                base_url
            )));
        }

        let checkout_url = external_config
            .checkout_url
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| constants::DEFAULT_CHECKOUT_URL.to_string());
        Url::parse(&checkout_url)?;

        Ok(Self {
            course_data_url: base_url.join(&external_config.endpoints.course_data)?,
            courses_url: base_url.join(&external_config.endpoints.courses)?,
            base_url,
            checkout_url,
            user_agent: constants::USER_AGENT.into(),
            connect_timeout: Duration::from_secs(
                external_config.network.connect_timeout_secs.unwrap_or(10),
            ),
            timeout: Duration::from_secs(external_config.network.timeout_secs.unwrap_or(30)),
            max_retries: external_config.network.max_retries.unwrap_or(0),
            configured_user: external_config.user,
        })
    }

    /// 以新的 API 地址重建配置，端点路径保持不变
    pub fn with_base_url(&self, base_url: &str) -> AppResult<Self> {
        let mut external = ExternalConfig::default_app_config();
        external.user = self.configured_user.clone();
        external.checkout_url = Some(self.checkout_url.clone());
        external.endpoints = EndpointConfig {
            course_data: self.course_data_url.path().to_string(),
            courses: self.courses_url.path().to_string(),
        };
        external.network = NetworkConfig {
            base_url: Some(base_url.to_string()),
            connect_timeout_secs: Some(self.connect_timeout.as_secs()),
            timeout_secs: Some(self.timeout.as_secs()),
            max_retries: Some(self.max_retries),
        };
        Self::from_external(external, None)
    }
}

#[cfg(feature = "testing")]
impl Default for AppConfig {
    fn default() -> Self {
        Self::from_external(ExternalConfig::default_app_config(), None)
            .unwrap_or_else(|e| panic!("default config must be valid: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_resolves_endpoints() {
        let config = AppConfig::from_external(ExternalConfig::default_app_config(), None).unwrap();
        assert_eq!(
            config.course_data_url.as_str(),
            "http://localhost:3000/api/courseData"
        );
        assert_eq!(config.courses_url.as_str(), "http://localhost:3000/api/courses");
        assert_eq!(config.max_retries, 0);
        assert_eq!(config.checkout_url, constants::DEFAULT_CHECKOUT_URL);
    }

    #[test]
    fn test_base_url_override_wins() {
        let config = AppConfig::from_external(
            ExternalConfig::default_app_config(),
            Some("http://127.0.0.1:4000"),
        )
        .unwrap();
        assert_eq!(
            config.course_data_url.as_str(),
            "http://127.0.0.1:4000/api/courseData"
        );

        // 空白覆盖项被忽略
        let config =
            AppConfig::from_external(ExternalConfig::default_app_config(), Some("  ")).unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:3000/");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let external: ExternalConfig =
            serde_json::from_str(r#"{ "network": { "base_url": "http://example.test" } }"#).unwrap();
        let config = AppConfig::from_external(external, None).unwrap();
        assert_eq!(config.courses_url.as_str(), "http://example.test/api/courses");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.configured_user, None);
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result =
            AppConfig::from_external(ExternalConfig::default_app_config(), Some("not a url"));
        assert!(matches!(result, Err(AppError::Url(_))));

        let result =
            AppConfig::from_external(ExternalConfig::default_app_config(), Some("mailto:a@b.c"));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_with_base_url_keeps_endpoints() {
        let mut external = ExternalConfig::default_app_config();
        external.endpoints.course_data = "/v2/courseData".into();
        let config = AppConfig::from_external(external, None).unwrap();
        let moved = config.with_base_url("http://127.0.0.1:9").unwrap();
        assert_eq!(moved.course_data_url.as_str(), "http://127.0.0.1:9/v2/courseData");
    }
}
