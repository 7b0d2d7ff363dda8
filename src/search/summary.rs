/// Characters of context kept on each side of the target word.
pub const CONTEXT_CHARS: usize = 25;

const ELLIPSIS: &str = "...";

/// Trims `line` down to `context_chars` characters on either side of the
/// first occurrence of `target`.
///
/// An ellipsis marks each side that was cut. When `target` does not occur in
/// `line` (the lookup is case-sensitive) the line is returned as is.
pub fn summarize(line: &str, target: &str, context_chars: usize) -> String {
    let Some(byte_idx) = line.find(target) else {
        return line.to_string();
    };

    let chars: Vec<char> = line.chars().collect();
    let start_char = line[..byte_idx].chars().count();
    let target_chars = target.chars().count();

    let start = start_char.saturating_sub(context_chars);
    let end = (start_char + target_chars + context_chars).min(chars.len());

    let mut out = String::new();
    if start > 0 {
        out.push_str(ELLIPSIS);
    }
    out.extend(&chars[start..end]);
    if end < chars.len() {
        out.push_str(ELLIPSIS);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_line_is_kept_whole() {
        assert_eq!(summarize("who ordered snakes?", "snake", 25), "who ordered snakes?");
    }

    #[test]
    fn missing_target_returns_line() {
        assert_eq!(summarize("Who ordered Snakes?", "snake", 25), "Who ordered Snakes?");
    }

    #[test]
    fn both_sides_trimmed() {
        let line = format!("{}needle{}", "a".repeat(40), "b".repeat(40));
        let summary = summarize(&line, "needle", 5);
        assert_eq!(summary, "...aaaaaneedlebbbbb...");
    }

    #[test]
    fn only_tail_trimmed_near_start() {
        let summary = summarize("needle and a long tail after it", "needle", 3);
        assert_eq!(summary, "needle an...");
    }

    #[test]
    fn counts_characters_not_bytes() {
        let summary = summarize("ééééé key ééééé", "key", 2);
        assert_eq!(summary, "...é key é...");
    }
}
