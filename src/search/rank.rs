//! Merging and ordering of content and title matches.

use crate::search::content::ContentMatch;
use crate::search::summary::{CONTEXT_CHARS, summarize};
use regex::{Regex, RegexBuilder};
use std::collections::HashSet;

/// Primary sort key for items whose file name has no whole-word hit.
pub const NO_WORD_MATCH: usize = 1024;

/// One search hit, ready to be displayed.
///
/// The lowercase fields are derived from their originals when the item is
/// built and are only used for matching and sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResultItem {
    filename: String,
    filename_lower: String,
    match_content: String,
    match_content_lower: String,
    match_summary: String,
}

impl SearchResultItem {
    /// A note that matched on its body. `target` is the word the summary is
    /// centred on.
    pub fn content_match(filename: String, line: String, target: &str) -> Self {
        let match_summary = summarize(&line, target, CONTEXT_CHARS);
        Self {
            filename_lower: filename.to_lowercase(),
            filename,
            match_content_lower: line.to_lowercase(),
            match_content: line,
            match_summary,
        }
    }

    /// A note that matched on its file name only.
    pub fn title_match(filename: String) -> Self {
        Self {
            filename_lower: filename.to_lowercase(),
            filename,
            match_content: String::new(),
            match_content_lower: String::new(),
            match_summary: String::new(),
        }
    }

    /// Path relative to the notes root.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn filename_lower(&self) -> &str {
        &self.filename_lower
    }

    pub fn match_content(&self) -> &str {
        &self.match_content
    }

    pub fn match_content_lower(&self) -> &str {
        &self.match_content_lower
    }

    pub fn match_summary(&self) -> &str {
        &self.match_summary
    }
}

/// Finds a term as a whole word: bounded on both sides by the string edge or
/// a character that is neither a letter nor a digit. Matching ignores case.
#[derive(Debug, Clone)]
pub struct WordMatcher {
    regex: Option<Regex>,
}

impl WordMatcher {
    pub fn new(term: Option<&str>) -> Self {
        let regex = term.filter(|t| !t.is_empty()).and_then(|t| {
            let pattern = format!(
                r"(?:^|[^\p{{L}}\p{{N}}])({})(?:[^\p{{L}}\p{{N}}]|$)",
                regex::escape(t)
            );
            RegexBuilder::new(&pattern).case_insensitive(true).build().ok()
        });
        Self { regex }
    }

    /// Character index of the first whole-word occurrence in `haystack`.
    pub fn position(&self, haystack: &str) -> Option<usize> {
        let regex = self.regex.as_ref()?;
        let start = regex.captures(haystack)?.get(1)?.start();
        Some(haystack[..start].chars().count())
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.as_ref().is_some_and(|r| r.is_match(haystack))
    }
}

type SortKey = (usize, u8, u8, String);

fn sort_key(word: &WordMatcher, item: &SearchResultItem) -> SortKey {
    (
        word.position(&item.filename_lower).unwrap_or(NO_WORD_MATCH),
        if word.is_match(&item.match_content_lower) { 0 } else { 1 },
        if item.match_summary.is_empty() { 1 } else { 0 },
        item.filename_lower.clone(),
    )
}

/// Combines content and title matches into one ordered list.
///
/// Content matches come first and win over title matches for the same
/// relative path, so each file appears once. The list is then sorted by:
/// whole-word position of the first term in the file name, whether the
/// first term is a whole word in the matched line, whether there is a
/// summary, and finally the lowercase file name.
///
/// `terms` are the query terms as typed; only the first one is used.
pub fn rank<T: AsRef<str>>(
    content: Vec<ContentMatch>,
    titles: Vec<String>,
    terms: &[T],
) -> Vec<SearchResultItem> {
    let first = terms.first().map(|t| t.as_ref());
    let target = first.unwrap_or_default();

    let mut items: Vec<SearchResultItem> = content
        .into_iter()
        .map(|m| SearchResultItem::content_match(m.path, m.line, target))
        .collect();

    let seen: HashSet<String> = items.iter().map(|i| i.filename.clone()).collect();
    items.extend(
        titles
            .into_iter()
            .filter(|path| !seen.contains(path))
            .map(SearchResultItem::title_match),
    );

    let word = WordMatcher::new(first);
    items.sort_by_cached_key(|item| sort_key(&word, item));
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_word_position() {
        let word = WordMatcher::new(Some("python"));
        assert_eq!(word.position("python cheatsheet.txt"), Some(0));
        assert_eq!(word.position("not python.txt"), Some(4));
        assert_eq!(word.position("pythonic.txt"), None);
    }

    #[test]
    fn prefix_of_a_longer_word_does_not_count() {
        let word = WordMatcher::new(Some("py"));
        assert_eq!(word.position("pycharm.txt"), None);
        assert_eq!(word.position("my py notes.txt"), Some(3));
    }

    #[test]
    fn word_match_ignores_case() {
        let word = WordMatcher::new(Some("PYTHON"));
        assert_eq!(word.position("python cheatsheet.txt"), Some(0));
    }

    #[test]
    fn missing_or_empty_term_never_matches() {
        assert!(!WordMatcher::new(None).is_match("anything"));
        assert!(!WordMatcher::new(Some("")).is_match("anything"));
    }

    #[test]
    fn empty_terms_fall_back_to_summary_then_name() {
        let items = rank::<&str>(
            vec![ContentMatch {
                path: "b.txt".into(),
                line: "text".into(),
            }],
            vec!["a.txt".into()],
            &[],
        );
        let names: Vec<_> = items.iter().map(|i| i.filename()).collect();
        assert_eq!(names, vec!["b.txt", "a.txt"]);
    }

    #[test]
    fn content_match_wins_over_title_match() {
        let items = rank(
            vec![ContentMatch {
                path: "snake.txt".into(),
                line: "a snake".into(),
            }],
            vec!["snake.txt".into()],
            &["snake"],
        );
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].match_summary(), "a snake");
    }

    #[test]
    fn whole_word_line_beats_earlier_name() {
        let items = rank(
            vec![
                ContentMatch {
                    path: "a.txt".into(),
                    line: "snakes everywhere".into(),
                },
                ContentMatch {
                    path: "b.txt".into(),
                    line: "a snake here".into(),
                },
            ],
            vec![],
            &["snake"],
        );
        let names: Vec<_> = items.iter().map(|i| i.filename()).collect();
        assert_eq!(names, vec!["b.txt", "a.txt"]);
        assert!(items.iter().all(|i| !i.match_summary().is_empty()));
    }
}
