// src/config/session.rs

use crate::{
    config::ExternalConfig,
    constants,
    error::{AppError, AppResult},
};
use anyhow::{Context, anyhow};
use log::{debug, info};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub(super) fn get_config_path(override_path: Option<&Path>) -> AppResult<PathBuf> {
    if let Some(path) = override_path {
        return Ok(path.to_path_buf());
    }
    let path = dirs::home_dir()
        .ok_or_else(|| AppError::Other(anyhow!("无法获取用户主目录")))?
        .join(constants::CONFIG_DIR_NAME)
        .join(constants::CONFIG_FILE_NAME);
    Ok(path)
}

pub(crate) fn load_or_create_external_config(
    override_path: Option<&Path>,
) -> AppResult<ExternalConfig> {
    let config_path = get_config_path(override_path)?;
    if config_path.is_file() {
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("读取配置文件 '{}' 失败", config_path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("解析配置文件 '{}' 失败", config_path.display()))
            .map_err(AppError::from)
    } else {
        info!("配置文件 {:?} 不存在，将创建默认配置。", config_path);
        let config = ExternalConfig::default_app_config();

        if let Some(dir) = config_path.parent() {
            fs::create_dir_all(dir)?;
        }

        let json_content = serde_json::to_string_pretty(&config)?;
        fs::write(&config_path, json_content)?;

        Ok(config)
    }
}

/// 当前登录用户。页面层只关心“是否登录”以及问候语中的名字。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub full_name: String,
    pub first_name: String,
}

impl UserProfile {
    pub fn from_full_name(full_name: &str) -> Option<Self> {
        let full_name = full_name.split_whitespace().collect::<Vec<_>>().join(" ");
        let first_name = full_name.split(' ').next()?.to_string();
        if first_name.is_empty() {
            return None;
        }
        Some(Self {
            full_name,
            first_name,
        })
    }
}

/// 按优先级解析登录用户: 命令行参数 > 环境变量 > 配置文件
pub fn resolve_user(
    cli_user: Option<&str>,
    configured_user: Option<&str>,
) -> (Option<UserProfile>, String) {
    if let Some(user) = cli_user.and_then(UserProfile::from_full_name) {
        debug!("使用来自命令行参数的用户");
        return (Some(user), "命令行参数".to_string());
    }
    if let Ok(name) = std::env::var(constants::USER_ENV_VAR)
        && let Some(user) = UserProfile::from_full_name(&name)
    {
        debug!("使用来自环境变量 {} 的用户", constants::USER_ENV_VAR);
        return (
            Some(user),
            format!("环境变量 ({})", constants::USER_ENV_VAR),
        );
    }
    if let Some(user) = configured_user.and_then(UserProfile::from_full_name) {
        debug!("使用来自本地配置文件的用户");
        return (Some(user), "本地配置文件".to_string());
    }
    debug!("未在任何位置找到登录用户");
    (None, "未找到".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_user_profile_first_name() {
        let user = UserProfile::from_full_name("  Ada   Lovelace ").unwrap();
        assert_eq!(user.full_name, "Ada Lovelace");
        assert_eq!(user.first_name, "Ada");

        assert_eq!(UserProfile::from_full_name(""), None);
        assert_eq!(UserProfile::from_full_name("   "), None);
    }

    #[test]
    fn test_cli_user_has_priority() {
        let (user, source) = resolve_user(Some("Grace Hopper"), Some("Someone Else"));
        assert_eq!(user.unwrap().first_name, "Grace");
        assert_eq!(source, "命令行参数");
    }

    #[test]
    fn test_blank_cli_user_is_ignored() {
        // 环境变量可能在测试机上被设置，只验证空白参数不会被采用
        let (user, source) = resolve_user(Some("  "), Some("Config User"));
        assert!(user.is_some());
        assert_ne!(source, "命令行参数");
    }

    #[test]
    fn test_missing_config_file_is_created_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = load_or_create_external_config(Some(&path)).unwrap();
        assert!(path.is_file());
        assert_eq!(
            config.network.base_url.as_deref(),
            Some(constants::DEFAULT_BASE_URL)
        );

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["endpoints"]["course_data"], "/api/courseData");
    }

    #[test]
    fn test_existing_config_file_is_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "user": "Alan Turing" }"#).unwrap();

        let config = load_or_create_external_config(Some(&path)).unwrap();
        assert_eq!(config.user.as_deref(), Some("Alan Turing"));
        assert_eq!(config.endpoints.courses, "/api/courses");
    }

    #[test]
    fn test_broken_config_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            load_or_create_external_config(Some(&path)),
            Err(AppError::Other(_))
        ));
    }
}
