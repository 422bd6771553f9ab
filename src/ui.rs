// src/ui.rs

use crate::{constants, utils};
use colored::*;
use std::io::{self, Write};

pub fn header(title: &str) -> String {
    format!(
        "{rule}\n {}\n{rule}\n",
        title.cyan().bold(),
        rule = "═".repeat(constants::UI_WIDTH)
    )
}

pub fn sub_header(title: &str) -> String {
    format!("\n--- {} ---\n", title.bold())
}

pub fn box_message(
    title: &str,
    content: &[&str],
    color_func: fn(ColoredString) -> ColoredString,
) -> String {
    let rule = "─".repeat(constants::UI_WIDTH - 2);
    let mut out = format!("┌{rule}┐\n  {}\n├{rule}┤\n", color_func(title.bold()));
    for line in content {
        out.push_str(&format!(
            "  {}\n",
            utils::truncate_text(line, constants::UI_WIDTH - 4)
        ));
    }
    out.push_str(&format!("└{rule}┘\n"));
    out
}

pub fn print_header(title: &str) {
    print!("\n{}", header(title));
}

pub fn prompt(message: &str, default: Option<&str>) -> io::Result<String> {
    let default_str = default.map_or("".to_string(), |d| format!(" (默认: {})", d));
    print!("\n>>> {}{}: ", message, default_str);
    io::stdout().flush()?;
    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    let input = input.trim().to_string();
    if input.is_empty() {
        Ok(default.unwrap_or("").to_string())
    } else {
        Ok(input)
    }
}
