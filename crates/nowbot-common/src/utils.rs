//! Shared string helpers for text that ends up in Discord messages.

/// Maximum length Discord accepts for an autocomplete choice name or value.
pub const DISCORD_CHOICE_MAX_CHARS: usize = 100;

/// Truncates a string to at most `max_chars` characters, ending with `...`
/// when anything was cut.
///
/// Counts Unicode scalar values, so multi-byte input never splits a character.
#[must_use]
pub fn truncate_string(input: &str, max_chars: usize) -> String {
    if input.chars().count() <= max_chars {
        return input.to_string();
    }

    let keep = max_chars.saturating_sub(3);
    let mut truncated: String = input.chars().take(keep).collect();
    truncated.push_str(&".".repeat(max_chars.min(3)));
    truncated
}

/// Makes user-supplied text safe to echo back in a message.
///
/// Control characters are dropped, Markdown syntax is escaped and `@` is
/// followed by a zero-width space so that echoed input cannot ping anyone.
#[must_use]
pub fn sanitize_for_display(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars().filter(|c| !c.is_control()) {
        match c {
            '*' | '_' | '~' | '`' | '|' | '>' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            '@' => {
                out.push('@');
                out.push('\u{200B}');
            }
            _ => out.push(c),
        }
    }
    out
}
