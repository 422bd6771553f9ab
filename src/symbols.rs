// src/symbols.rs

use colored::{ColoredString, Colorize};
use std::sync::LazyLock;

pub static ERROR: LazyLock<ColoredString> = LazyLock::new(|| "[X]".red());
pub static INFO: LazyLock<ColoredString> = LazyLock::new(|| "[i]".cyan());
pub static CTRL_C: LazyLock<ColoredString> = LazyLock::new(|| "Ctrl+C".yellow());
pub static LINK: LazyLock<ColoredString> = LazyLock::new(|| "->".blue());
pub static SECTIONS: &str = "📚";
pub static LECTURES: &str = "📝";
pub static DURATION: &str = "⏱️";
pub static LANGUAGE: &str = "🌐";
pub static IMAGE: &str = "🖼️";
