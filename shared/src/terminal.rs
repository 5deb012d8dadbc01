use std::io::{stdout, Write};

use colored::Colorize;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};

use crate::types::Result;

pub fn clear_screen() -> Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    out.flush()?;
    Ok(())
}

/// Underlined section heading.
pub fn heading(text: &str) -> String {
    let rule = "─".repeat(text.chars().count().max(8));
    format!("{}\n{}", text.bold().cyan(), rule.dimmed())
}
