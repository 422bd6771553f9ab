// src/pages/listing.rs

use crate::{
    config::session::UserProfile,
    constants::{self, fallback, page},
    models::CourseSummary,
    symbols, ui, utils,
};
use colored::*;

pub fn render_listing(courses: &[CourseSummary], user: &UserProfile, search: &str) -> String {
    let mut out = ui::box_message(
        "Sharpen Your Skills With Professional Online Courses",
        &["[ Join Now ]"],
        |s| s.blue(),
    );

    let heading = if search.is_empty() {
        "Courses".to_string()
    } else {
        format!("Courses in '{}'", search)
    };
    out.push_str(&ui::sub_header(&heading));
    if courses.is_empty() {
        out.push_str("No courses available.\n");
    }
    for course in courses {
        out.push_str(&render_card(course));
    }

    out.push_str(&render_sidebar(user));
    out
}

fn render_card(course: &CourseSummary) -> String {
    let mut out = format!(
        "\n[{}] {}\n  {} {}\n",
        course.category.magenta(),
        utils::truncate_text(&course.title, constants::TEXT_TRUNCATE_LENGTH).bold(),
        *symbols::LINK,
        utils::course_path(&course.id)
    );
    if course.thumbnail != fallback::PLACEHOLDER {
        out.push_str(&format!("  {} {}\n", symbols::IMAGE, course.thumbnail.dimmed()));
    }
    out.push_str(&format!(
        "  by {} ({})",
        course.instructor.name, course.instructor.role
    ));
    if course.instructor.avatar != fallback::PLACEHOLDER {
        out.push_str(&format!("  {}", course.instructor.avatar.dimmed()));
    }
    out.push('\n');
    out
}

fn render_sidebar(user: &UserProfile) -> String {
    let first_name = if user.first_name.is_empty() {
        fallback::USER_NAME
    } else {
        user.first_name.as_str()
    };
    let mut out = ui::sub_header(&format!("Welcome Back {}!", first_name));
    out.push_str(&format!(
        "Continue Your Journey  {} {}\n",
        *symbols::LINK,
        constants::PROFILE_PATH
    ));

    out.push_str(&ui::sub_header("Your Mentor"));
    for mentor in page::MENTORS {
        out.push_str(&format!(
            "{:<14} {:<24} [ Follow ]  {}\n",
            mentor.name,
            mentor.role.dimmed(),
            mentor.avatar.dimmed()
        ));
    }
    out
}

/// 未登录时显示的页面，不请求课程列表
pub fn render_login_prompt() -> String {
    ui::box_message(
        "Please Log In",
        &[
            format!("{} {}", *symbols::LINK, constants::LOGIN_PATH).as_str(),
            format!(
                "Use --user <NAME> or set {} to sign in.",
                constants::USER_ENV_VAR
            )
            .as_str(),
        ],
        |s| s.yellow(),
    )
}
