/// Trim a user-supplied task; whitespace-only input is rejected before any request.
pub fn normalize_task(raw: &str) -> Option<String> {
    let collapsed = raw.split_whitespace().collect::<Vec<&str>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}

/// Strip a surrounding markdown code fence (```json ... ```), if any.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    if !(trimmed.starts_with("```") && trimmed.ends_with("```")) || trimmed.len() < 6 {
        return trimmed;
    }
    let inner = &trimmed[3..trimmed.len() - 3];
    // Drop the info string on the opening line ("json", "JSON", ...)
    match inner.find('\n') {
        Some(pos) if !inner[..pos].contains(|c: char| c == '{' || c == '[') => inner[pos + 1..].trim(),
        _ => inner.trim(),
    }
}
