//! Width-aware line wrapping for the output pane.
use unicode_width::UnicodeWidthChar;

/// Splits `text` into rows no wider than `width` columns.
///
/// Embedded newlines start a new row. Wide characters are never split; an
/// empty input still yields one (empty) row.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for line in text.split('\n') {
        let mut row = String::new();
        let mut row_width = 0;

        for c in line.chars() {
            let c = if c == '\t' { ' ' } else { c };
            let char_width = UnicodeWidthChar::width(c).unwrap_or(0);
            if row_width + char_width > width && !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            row.push(c);
            row_width += char_width;
        }

        rows.push(row);
    }

    rows
}

/// Truncates to `width` columns, marking the cut with `...`.
pub fn truncate(text: &str, width: usize) -> String {
    let total: usize = text
        .chars()
        .map(|c| UnicodeWidthChar::width(c).unwrap_or(0))
        .sum();
    if total <= width {
        return text.to_string();
    }

    let budget = width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    if width >= 3 {
        out.push_str("...");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_long_lines_and_keeps_newlines() {
        assert_eq!(
            wrap_text("abcdef\ngh", 4),
            vec!["abcd".to_string(), "ef".to_string(), "gh".to_string()]
        );
    }

    #[test]
    fn empty_text_is_one_row() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn wide_characters_are_not_split() {
        assert_eq!(wrap_text("日本語", 4), vec!["日本".to_string(), "語".to_string()]);
    }

    #[test]
    fn truncate_marks_the_cut() {
        assert_eq!(truncate("firebase deploy", 10), "firebas...");
        assert_eq!(truncate("short", 10), "short");
    }
}
