use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use crate::types::Result;

/// Standardized confirmation prompt used across binaries.
pub fn ask_confirmation(prompt: &str, default_yes: bool) -> Result<bool> {
    let choice = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default_yes)
        .show_default(true)
        .interact()?;
    Ok(choice)
}

/// Free-text prompt. Empty answers are allowed; callers validate.
pub fn ask_text(prompt: &str) -> Result<String> {
    let text: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(text)
}

/// Menu selection, returns the chosen index.
pub fn ask_choice(prompt: &str, items: &[String], default: usize) -> Result<usize> {
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(default.min(items.len().saturating_sub(1)))
        .interact()?;
    Ok(index)
}
