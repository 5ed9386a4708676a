/// Characters removed from resume text before prompting and before layout.
pub const MARKUP_CHARS: [char; 4] = ['*', '_', '`', '~'];

/// Removes markdown emphasis characters, keeping every other character in order.
pub fn strip_markup(text: &str) -> String {
    text.chars().filter(|c| !MARKUP_CHARS.contains(c)).collect()
}
