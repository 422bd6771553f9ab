// src/workflows.rs

use crate::{
    AppContext,
    builder::{CourseSource, catalog::CourseCatalog, course::CourseViewModelBuilder},
    error::{AppError, AppResult},
    pages::{self, PageContext},
    symbols, ui,
};
use log::{error, info};
use std::{io, sync::Arc};

fn course_source(context: &AppContext) -> Arc<dyn CourseSource> {
    context.http_client.clone()
}

/// 详情模式 (`--id`)。课程不存在不是错误。
pub(crate) async fn run_detail(context: AppContext, id: &str) -> AppResult<()> {
    let builder = CourseViewModelBuilder::new(course_source(&context));
    let course = builder.build(id).await;

    if context.args.json {
        println!("{}", serde_json::to_string_pretty(&course)?);
        return Ok(());
    }

    let page = match &course {
        Some(course) => pages::detail::render_detail(course, &PageContext::from_config(&context.config)),
        None => pages::detail::render_not_found(id),
    };
    print!("\n{}", page);
    Ok(())
}

/// 列表模式 (`--list`)。未登录时只显示登录提示。
pub(crate) async fn run_listing(context: AppContext) -> AppResult<()> {
    let Some(user) = &context.user else {
        info!("未登录，显示登录提示");
        print!("\n{}", pages::listing::render_login_prompt());
        return Ok(());
    };

    let search = context.args.search.as_deref().unwrap_or("").trim();
    let courses = CourseCatalog::new(course_source(&context)).fetch(search).await?;
    print!("\n{}", pages::listing::render_listing(&courses, user, search));
    Ok(())
}

/// 交互模式：逐一输入课程 ID，空行退出
pub(crate) async fn run_interactive(context: AppContext) -> AppResult<()> {
    ui::print_header("交互模式");
    println!(
        "在此模式下，你可以逐一输入课程 ID 查看详情。输入空行或按 {} 退出。",
        *symbols::CTRL_C
    );

    loop {
        match ui::prompt("请输入课程 ID", None) {
            Ok(input) if !input.is_empty() => {
                if let Err(e) = run_detail(context.clone(), &input).await {
                    error!("交互模式任务 '{}' 失败: {}", input, e);
                    eprintln!("\n{} 处理课程 '{}' 时发生错误: {}", *symbols::ERROR, input, e);
                }
            }
            Ok(_) => break,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(_) => return Err(AppError::UserInterrupt),
        }
    }

    println!("\n{} 退出交互模式。", *symbols::INFO);
    Ok(())
}
