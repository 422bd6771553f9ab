// src/cli.rs

use clap::{Parser, ValueEnum, command, crate_version};
use std::path::PathBuf;

/// 定义日志输出级别
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(
    version = crate_version!(),
    about,
    long_about = None,
    arg_required_else_help = true,
    disable_help_flag = true,
    disable_version_flag = true,
)]
#[command(group(
    clap::ArgGroup::new("mode")
        .required(true)
        .args(&["interactive", "id", "list"]),
))]
pub struct Cli {
    // --- 运行模式 (Mode) ---
    /// 启动交互式会话，逐一输入课程 ID 查看详情
    #[arg(short, long, action = clap::ArgAction::SetTrue, help_heading = "Mode")]
    pub interactive: bool,
    /// 显示指定 ID 的课程详情页
    #[arg(long, value_parser = clap::builder::NonEmptyStringValueParser::new(), help_heading = "Mode")]
    pub id: Option<String>,
    /// 显示课程列表页
    #[arg(short, long, action = clap::ArgAction::SetTrue, help_heading = "Mode")]
    pub list: bool,

    // --- 选项 (Options) ---
    /// [列表模式] 按分类过滤课程 (不区分大小写)
    #[arg(short, long, value_name = "CATEGORY", conflicts_with_all = ["id", "interactive"], help_heading = "Options")]
    pub search: Option<String>,
    /// 以该用户身份登录，优先级最高
    #[arg(short, long, value_name = "NAME", help_heading = "Options")]
    pub user: Option<String>,
    /// 覆盖配置文件中的课程 API 地址
    #[arg(long, value_name = "URL", help_heading = "Options")]
    pub base_url: Option<String>,
    /// 指定配置文件路径 (默认位于用户主目录)
    #[arg(short, long, value_name = "FILE", help_heading = "Options")]
    pub config: Option<PathBuf>,
    /// [详情模式] 以 JSON 格式输出课程视图模型，而不是渲染页面
    #[arg(long, action = clap::ArgAction::SetTrue, help_heading = "Options")]
    pub json: bool,

    // --- 通用选项 (General) ---
    /// 显示此帮助信息并退出
    #[arg(short = 'h', long, action = clap::ArgAction::Help, global = true, help_heading = "General")]
    _help: Option<bool>,
    /// 显示版本信息并退出
    #[arg(short = 'V', long, action = clap::ArgAction::Version, global = true, help_heading = "General")]
    _version: Option<bool>,
    /// (隐藏参数) 设置日志文件的输出级别，用于调试
    #[arg(long, value_enum, default_value_t = LogLevel::Off, global = true, hide = true)]
    pub log_level: LogLevel,
}
