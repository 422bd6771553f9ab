// src/lib.rs

pub mod builder;
pub mod cli;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod pages;
pub mod symbols;
pub mod ui;
pub mod utils;
mod workflows;

use crate::{
    cli::Cli,
    client::RobustClient,
    config::{AppConfig, session::UserProfile},
    error::AppResult,
};
use log::{debug, info};
use std::sync::Arc;

/// 一次运行的执行上下文
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<AppConfig>,
    pub http_client: Arc<RobustClient>,
    pub args: Arc<Cli>,
    pub user: Option<UserProfile>,
}

/// 库的公共入口点，由 `main.rs` 调用
pub async fn run_from_cli(args: Arc<Cli>) -> AppResult<()> {
    debug!("CLI 参数: {:?}", args);

    let config = Arc::new(AppConfig::new(&args)?);
    debug!("加载的应用配置: {:?}", config);

    let (user, source) =
        config::session::resolve_user(args.user.as_deref(), config.configured_user.as_deref());
    match &user {
        Some(profile) => info!("从 {} 加载登录用户 '{}'", source, profile.full_name),
        None => info!("未登录"),
    }

    let http_client = Arc::new(RobustClient::new(config.clone())?);
    let context = AppContext {
        config,
        http_client,
        args: args.clone(),
        user,
    };

    if args.interactive {
        workflows::run_interactive(context).await?;
    } else if args.list {
        workflows::run_listing(context).await?;
    } else if let Some(id) = &args.id {
        workflows::run_detail(context, id).await?;
    };

    Ok(())
}
