// src/pages/detail.rs

use super::PageContext;
use crate::{
    constants::page,
    models::CourseViewModel,
    symbols, ui,
};
use colored::*;

pub fn render_detail(course: &CourseViewModel, ctx: &PageContext) -> String {
    let mut out = String::new();

    out.push_str(&ui::header(&course.title));
    out.push_str(&format!("{} Preview: {}\n", *symbols::LINK, page::PREVIEW_VIDEO_URL));

    out.push_str(&ui::sub_header("Instructor"));
    out.push_str(&format!(
        "{} ({})\n",
        course.instructor.bold(),
        page::INSTRUCTOR_ROLE.dimmed()
    ));

    out.push_str(&ui::sub_header("About Course"));
    out.push_str(&format!("{}\n", course.description));

    out.push_str(&render_curriculum(course));
    out.push_str(&render_reviews());
    out.push_str(&render_purchase_panel(course, ctx));
    out
}

fn render_curriculum(course: &CourseViewModel) -> String {
    let mut out = ui::sub_header("Curriculum");
    if course.chapters.is_empty() {
        out.push_str("No sections published yet.\n");
        return out;
    }
    for (i, chapter) in course.chapters.iter().enumerate() {
        out.push_str(&format!(
            "{}. {}  [{} | {} videos]\n",
            i + 1,
            chapter.title.bold(),
            chapter.duration,
            chapter.total_videos
        ));
        for (j, lesson) in chapter.lessons.iter().enumerate() {
            out.push_str(&format!("   {}.{} {}\n", i + 1, j + 1, lesson.title));
        }
    }
    out
}

fn render_reviews() -> String {
    let mut out = ui::sub_header("Reviews");
    for review in page::REVIEWS {
        out.push_str(&format!(
            "{}  {}\n  {}\n",
            review.name.bold(),
            review.avatar.dimmed(),
            review.comment
        ));
    }
    out.push_str(&format!("{}\n", "[ Load more reviews ]".dimmed()));
    out
}

fn render_purchase_panel(course: &CourseViewModel, ctx: &PageContext) -> String {
    let mut lines = vec![format!("{} {}", page::CURRENCY, course.price)];
    if let Some(list_price) = course.list_price() {
        lines.push(format!(
            "{} {} (was)  {}",
            page::CURRENCY,
            list_price,
            page::DISCOUNT_BADGE
        ));
    }
    lines.push(format!("Buy: {}", ctx.checkout_url));
    lines.push(String::new());
    lines.push(format!("{} {} Sections", symbols::SECTIONS, course.section_count()));
    lines.push(format!("{} {} Lectures", symbols::LECTURES, course.lecture_count()));
    lines.push(format!("{} {}", symbols::DURATION, course.duration));
    lines.push(format!("{} {}", symbols::LANGUAGE, page::LANGUAGE));

    let content: Vec<&str> = lines.iter().map(String::as_str).collect();
    format!("\n{}", ui::box_message("Enroll", &content, |s| s.green()))
}

/// “课程不存在”是正常显示状态
pub fn render_not_found(identifier: &str) -> String {
    ui::box_message(
        "Course not found",
        &[format!("No course matches the ID '{}'.", identifier).as_str()],
        |s| s.yellow(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Chapter, Lesson};

    fn sample_course(price: &str) -> CourseViewModel {
        CourseViewModel {
            id: "1".into(),
            title: "Course Name Unavailable".into(),
            instructor: "Unknown Instructor".into(),
            description: "No description available".into(),
            duration: "N/A".into(),
            chapters: vec![Chapter {
                title: "Intro".into(),
                duration: "10m".into(),
                total_videos: "2".into(),
                lessons: vec![
                    Lesson { title: "L1".into(), video_url: None },
                    Lesson { title: "L2".into(), video_url: None },
                ],
            }],
            price: price.into(),
        }
    }

    fn ctx() -> PageContext {
        PageContext {
            checkout_url: "https://pay.test/checkout".into(),
        }
    }

    #[test]
    fn test_detail_page_sections() {
        colored::control::set_override(false);
        let out = render_detail(&sample_course("499"), &ctx());

        assert!(out.contains("Course Name Unavailable"));
        assert!(out.contains(page::PREVIEW_VIDEO_URL));
        assert!(out.contains("Unknown Instructor (DSA Expert)"));
        assert!(out.contains("No description available"));
        assert!(out.contains("1. Intro  [10m | 2 videos]"));
        assert!(out.contains("   1.2 L2"));
        assert!(out.contains("Leonardo Da Vinci"));
        assert!(out.contains(page::REVIEWS[0].avatar));
        assert!(out.contains("INR 499"));
        assert!(out.contains("INR 1499 (was)  50% OFF"));
        assert!(out.contains("Buy: https://pay.test/checkout"));
        assert!(out.contains("1 Sections"));
        assert!(out.contains("2 Lectures"));
        assert!(out.contains("English"));
    }

    #[test]
    fn test_detail_page_without_numeric_price() {
        colored::control::set_override(false);
        let mut course = sample_course("N/A");
        course.chapters.clear();
        let out = render_detail(&course, &ctx());

        assert!(out.contains("INR N/A"));
        assert!(!out.contains("(was)"));
        assert!(out.contains("No sections published yet."));
        assert!(out.contains("0 Sections"));
        assert!(out.contains("0 Lectures"));
    }

    #[test]
    fn test_not_found_page() {
        colored::control::set_override(false);
        let out = render_not_found("nonexistent-id");
        assert!(out.contains("Course not found"));
        assert!(out.contains("nonexistent-id"));
    }
}
