//! # Pure Content Transforms
//!
//! Each transform takes the current content (and a char offset where
//! relevant) and returns the new content. Same inputs, same output, no
//! hidden state. Offsets are char indices, matching the selection-start
//! offsets the editor surface delivers.

use crate::config::{COMMENT_PREFIX, INDENT_UNIT};

/// Splice `text` into `content` at char `offset`.
///
/// Offsets past the end of the content clamp to the end.
pub fn insert_at(content: &str, offset: usize, text: &str) -> String {
    let byte_offset = char_to_byte_offset(content, offset);
    let mut result = String::with_capacity(content.len() + text.len());
    result.push_str(&content[..byte_offset]);
    result.push_str(text);
    result.push_str(&content[byte_offset..]);
    result
}

/// Remove a single leading two-space run from the start of the whole buffer.
///
/// Deliberately not line-aware: exactly one occurrence at position 0 is
/// removed, no matter how many lines the buffer holds.
pub fn outdent(content: &str) -> String {
    content
        .strip_prefix(INDENT_UNIT)
        .unwrap_or(content)
        .to_string()
}

/// Append a newline plus the leading-space run copied from the buffer's
/// last line.
///
/// The indentation source is always the buffer's last line, not the line
/// under the cursor.
pub fn newline_with_indent(content: &str) -> String {
    let last_line = content.rsplit('\n').next().unwrap_or("");
    let indent: String = last_line.chars().take_while(|&c| c == ' ').collect();
    let mut result = String::with_capacity(content.len() + 1 + indent.len());
    result.push_str(content);
    result.push('\n');
    result.push_str(&indent);
    result
}

/// Toggle a `//` line comment on the line containing char `offset`.
///
/// The line is resolved by accumulating each line's char count plus one for
/// the removed newline until the cumulative count exceeds `offset`; when no
/// line qualifies (offset past the final line) the first line is used.
/// Commented lines lose one `//` marker and at most one following
/// whitespace char after their leading whitespace; uncommented lines gain a
/// `"// "` prefix.
pub fn toggle_line_comment(content: &str, offset: usize) -> String {
    let lines: Vec<&str> = content.split('\n').collect();

    let mut char_count = 0;
    let mut line_index = 0;
    for (i, line) in lines.iter().enumerate() {
        char_count += line.chars().count() + 1;
        if char_count > offset {
            line_index = i;
            break;
        }
    }

    let mut lines: Vec<String> = lines.into_iter().map(str::to_string).collect();
    let line = &lines[line_index];

    lines[line_index] = if line.trim_start().starts_with("//") {
        uncomment_line(line)
    } else {
        format!("{COMMENT_PREFIX}{line}")
    };

    lines.join("\n")
}

/// Map a char offset to a byte offset, clamping past-the-end offsets
pub(crate) fn char_to_byte_offset(content: &str, offset: usize) -> usize {
    content
        .char_indices()
        .nth(offset)
        .map(|(i, _)| i)
        .unwrap_or(content.len())
}

/// Remove the first `//` marker (and at most one following whitespace char)
/// after the line's leading whitespace
fn uncomment_line(line: &str) -> String {
    let ws_end = line.len() - line.trim_start().len();
    let (ws, rest) = line.split_at(ws_end);
    let rest = rest.strip_prefix("//").unwrap_or(rest);
    let rest = rest
        .strip_prefix(|c: char| c.is_whitespace())
        .unwrap_or(rest);
    format!("{ws}{rest}")
}
