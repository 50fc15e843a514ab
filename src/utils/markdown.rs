//! Helpers for Telegram's MarkdownV2 parse mode.
//!
//! Every piece of user supplied text (festival names, user names, queries) has to pass
//! through [`escape_markdown`] before it is put into a reply.

/// Escapes every character with a special meaning in MarkdownV2
///
/// # Example
/// ```
/// use festival_bot::utils::markdown::escape_markdown;
///
/// assert_eq!(escape_markdown("Rock am Ring (2.6.)"), "Rock am Ring \\(2\\.6\\.\\)");
/// ```
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(
            c,
            '\\' | '_' | '*' | '[' | ']' | '(' | ')' | '~' | '`' | '>' | '#' | '+' | '-' | '='
                | '|' | '{' | '}' | '.' | '!'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Escapes the URL part of an inline link, where only `)` and `\` are special
pub fn escape_link_url(url: &str) -> String {
    url.replace('\\', "\\\\").replace(')', "\\)")
}

/// Renders `[text](url)` with both parts escaped
pub fn markdown_link(text: &str, url: &str) -> String {
    format!("[{}]({})", escape_markdown(text), escape_link_url(url))
}
