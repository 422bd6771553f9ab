// src/constants.rs

pub const UI_WIDTH: usize = 88;
pub const TEXT_TRUNCATE_LENGTH: usize = 60;
pub const CONFIG_DIR_NAME: &str = concat!(".", clap::crate_name!());
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = concat!(clap::crate_name!(), ".log");
pub const LOG_FALLBACK_FILE_NAME: &str = "fallback.log";
pub const USER_ENV_VAR: &str = "COURSE_MARKET_USER";
pub const USER_AGENT: &str = concat!(clap::crate_name!(), "/", clap::crate_version!());

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_CHECKOUT_URL: &str = "https://buy.stripe.com/test_6oE289fUcgBe5r2fYY";
pub const LOGIN_PATH: &str = "/login";
pub const PROFILE_PATH: &str = "/profile";
pub const COURSE_PATH_PREFIX: &str = "/courses/";

pub mod api {
    pub mod endpoints {
        pub const COURSE_DATA: &str = "/api/courseData";
        pub const COURSES: &str = "/api/courses";
    }
    /// 原始课程记录中的字段名
    pub mod fields {
        pub const RESULT: &str = "result";
        pub const ID: &str = "id";
        pub const COURSE_NAME: &str = "course_name";
        pub const INSTRUCTOR: &str = "course_instructor";
        pub const DESCRIPTION: &str = "course_description";
        pub const DURATION: &str = "course_duration";
        pub const PRICE: &str = "Price";
        pub const SECTIONS: &str = "course_sections";
        pub const TITLE: &str = "title";
        pub const THUMBNAIL: &str = "thumbnail";
        pub const CATEGORY: &str = "category";
        pub const INSTRUCTOR_OBJ: &str = "instructor";
        pub const NAME: &str = "name";
        pub const ROLE: &str = "role";
        pub const AVATAR: &str = "avatar";
    }
}

/// 字段缺失或为假值时使用的占位文本
pub mod fallback {
    pub const TITLE: &str = "Course Name Unavailable";
    pub const INSTRUCTOR: &str = "Unknown Instructor";
    pub const DESCRIPTION: &str = "No description available";
    pub const NOT_AVAILABLE: &str = "N/A";
    pub const SECTION_TITLE: &str = "Untitled Section";
    pub const LESSON_TITLE: &str = "Untitled Lesson";
    pub const LISTING_TITLE: &str = "Untitled Course";
    pub const CATEGORY: &str = "Uncategorized";
    pub const PLACEHOLDER: &str = "-";
    pub const USER_NAME: &str = "User";
}

pub mod page {
    pub const PREVIEW_VIDEO_URL: &str = "https://www.youtube.com/embed/MNeX4EGtR5Y";
    pub const INSTRUCTOR_ROLE: &str = "DSA Expert";
    pub const CURRENCY: &str = "INR";
    pub const LIST_PRICE_MARKUP: i64 = 1000;
    pub const DISCOUNT_BADGE: &str = "50% OFF";
    pub const LANGUAGE: &str = "English";

    pub struct Review {
        pub name: &'static str,
        pub avatar: &'static str,
        pub comment: &'static str,
    }

    pub const REVIEWS: &[Review] = &[Review {
        name: "Leonardo Da Vinci",
        avatar: "https://ui-avatars.com/api/?name=L+V&background=random",
        comment: "Loved the course. I've learned some very subtle techniques, especially on leaves.",
    }];

    pub struct Mentor {
        pub name: &'static str,
        pub role: &'static str,
        pub avatar: &'static str,
    }

    pub const MENTORS: &[Mentor] = &[
        Mentor {
            name: "Subhajit S",
            role: "DSA Expert",
            avatar: "https://ui-avatars.com/api/?name=S+S&background=random",
        },
        Mentor {
            name: "Debargha B",
            role: "Software Developer",
            avatar: "https://ui-avatars.com/api/?name=D+B&background=random",
        },
        Mentor {
            name: "Tridib P",
            role: "Frontend Developer",
            avatar: "https://ui-avatars.com/api/?name=T+P&background=random",
        },
        Mentor {
            name: "Anirban B",
            role: "Civil Engineer",
            avatar: "https://ui-avatars.com/api/?name=A+B&background=random",
        },
        Mentor {
            name: "Ayan B",
            role: "Thermodynamics Expert",
            avatar: "https://ui-avatars.com/api/?name=A+B&background=random",
        },
    ];
}
