use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shortens `s` to at most `max_len` characters, ending in "..." when cut.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Byte range of one row once the text is wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct VisualLine {
    start: usize,
    end: usize,
}

/// Breaks `text` into rows no wider than `max_width` columns, honouring `\n`.
///
/// Rows end at the last whitespace that fits, like a word-wrapped `Paragraph`
/// with `trim: true`. Whitespace at a break is dropped, and a word wider than
/// the row is split between characters.
fn wrap_lines(text: &str, max_width: usize) -> Vec<VisualLine> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();
    let mut start = 0;
    let mut width = 0;
    let mut last_space: Option<usize> = None;
    let mut wrapped = false;

    for (idx, ch) in text.char_indices() {
        if ch == '\n' {
            lines.push(VisualLine { start, end: idx });
            start = idx + ch.len_utf8();
            width = 0;
            last_space = None;
            wrapped = false;
            continue;
        }

        let is_space = ch.is_whitespace();
        if wrapped && is_space && idx == start {
            start = idx + ch.len_utf8();
            continue;
        }

        let ch_width = ch.width().unwrap_or(1);
        if width > 0 && width + ch_width > max_width {
            wrapped = true;
            if is_space {
                lines.push(VisualLine { start, end: idx });
                start = idx + ch.len_utf8();
                width = 0;
                last_space = None;
                continue;
            }
            match last_space.take() {
                Some(space) => {
                    lines.push(VisualLine { start, end: space });
                    start = space + text[space..].chars().next().map_or(1, char::len_utf8);
                    width = text[start..idx].width();
                    if width + ch_width > max_width {
                        lines.push(VisualLine { start, end: idx });
                        start = idx;
                        width = 0;
                    }
                }
                None => {
                    lines.push(VisualLine { start, end: idx });
                    start = idx;
                    width = 0;
                }
            }
        }

        if is_space {
            last_space = Some(idx);
        }
        width += ch_width;
    }

    lines.push(VisualLine {
        start,
        end: text.len(),
    });
    lines
}

/// Row and display column of the byte offset `cursor` inside wrapped `text`.
pub fn calculate_wrapped_cursor_position(
    text: &str,
    cursor: usize,
    max_width: usize,
) -> (usize, usize) {
    let cursor = cursor.min(text.len());
    let lines = wrap_lines(text, max_width);

    let (row, line) = lines
        .iter()
        .enumerate()
        .find(|(_, line)| cursor <= line.end)
        .unwrap_or((lines.len() - 1, &lines[lines.len() - 1]));

    let column = text
        .get(line.start..cursor)
        .map(|prefix| prefix.width())
        .unwrap_or(0);
    (row, column)
}
