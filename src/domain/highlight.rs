//! Keyword highlighting as structured spans

/// A run of text that either matched the query or did not
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub is_match: bool,
}

/// Text split into matching and non-matching spans.
///
/// Concatenating the spans always gives back the original text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Highlighted {
    pub spans: Vec<Span>,
}

impl Highlighted {
    /// The original text
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Text with every match wrapped in `open`/`close`
    pub fn render(&self, open: &str, close: &str) -> String {
        let mut out = String::new();
        for span in &self.spans {
            if span.is_match {
                out.push_str(open);
                out.push_str(&span.text);
                out.push_str(close);
            } else {
                out.push_str(&span.text);
            }
        }
        out
    }

    pub fn match_count(&self) -> usize {
        self.spans.iter().filter(|s| s.is_match).count()
    }

    fn push(&mut self, text: &str, is_match: bool) {
        if !text.is_empty() {
            self.spans.push(Span {
                text: text.to_string(),
                is_match,
            });
        }
    }
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Byte length of `needle` matched at the start of `rest`, if it matches
fn match_at(rest: &str, needle: &[char]) -> Option<usize> {
    let mut chars = rest.char_indices();
    for &n in needle {
        let (_, c) = chars.next()?;
        if !chars_eq_ignore_case(c, n) {
            return None;
        }
    }
    Some(chars.next().map_or(rest.len(), |(i, _)| i))
}

/// Byte ranges of every case-insensitive occurrence of `query`, left to
/// right and non-overlapping. The query is compared literally.
pub(crate) fn find_matches(text: &str, query: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = query.chars().collect();
    let mut matches = Vec::new();
    if needle.is_empty() {
        return matches;
    }

    let mut start = 0;
    while start < text.len() {
        let rest = &text[start..];
        match match_at(rest, &needle) {
            Some(len) => {
                matches.push((start, start + len));
                start += len;
            }
            None => start += rest.chars().next().map_or(1, char::len_utf8),
        }
    }
    matches
}

/// True when `query` occurs in `text`, ignoring case
pub(crate) fn contains_ignore_case(text: &str, query: &str) -> bool {
    let needle: Vec<char> = query.chars().collect();
    !needle.is_empty()
        && text
            .char_indices()
            .any(|(i, _)| match_at(&text[i..], &needle).is_some())
}

/// Mark every case-insensitive occurrence of `query` in `text`.
///
/// Matches are found left to right and never overlap. An empty query marks
/// nothing.
pub fn highlight(text: &str, query: &str) -> Highlighted {
    let mut result = Highlighted::default();
    let mut last = 0;
    for (start, end) in find_matches(text, query) {
        result.push(&text[last..start], false);
        result.push(&text[start..end], true);
        last = end;
    }
    result.push(&text[last..], false);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_is_identity() {
        for text in ["", "入試", "ABC abc", "a.b*c"] {
            let h = highlight(text, "");
            assert_eq!(h.plain_text(), text);
            assert_eq!(h.match_count(), 0);
        }
    }

    #[test]
    fn test_case_insensitive_preserves_casing() {
        let h = highlight("ABCabc", "abc");
        assert_eq!(
            h.spans,
            vec![
                Span {
                    text: "ABC".to_string(),
                    is_match: true
                },
                Span {
                    text: "abc".to_string(),
                    is_match: true
                },
            ]
        );
        assert_eq!(h.render("<", ">"), "<ABC><abc>");
    }

    #[test]
    fn test_surrounding_text_kept_verbatim() {
        let h = highlight("今年の入試は2月です。入試説明会もあります。", "入試");
        assert_eq!(h.match_count(), 2);
        assert_eq!(
            h.render("【", "】"),
            "今年の【入試】は2月です。【入試】説明会もあります。"
        );
        assert_eq!(h.plain_text(), "今年の入試は2月です。入試説明会もあります。");
    }

    #[test]
    fn test_special_characters_are_literal() {
        let h = highlight("a.c abc (x)", "a.c");
        assert_eq!(h.match_count(), 1);
        assert_eq!(h.render("[", "]"), "[a.c] abc (x)");

        let h = highlight("(x) x", "(x)");
        assert_eq!(h.render("[", "]"), "[(x)] x");
    }

    #[test]
    fn test_non_overlapping() {
        let h = highlight("aaaa", "aa");
        assert_eq!(h.match_count(), 2);
        assert_eq!(h.render("[", "]"), "[aa][aa]");

        let h = highlight("aaa", "aa");
        assert_eq!(h.render("[", "]"), "[aa]a");
    }

    #[test]
    fn test_very_long_query() {
        let query = "Ｋ".repeat(50_000);
        let text = format!("{}です", "ｋ".repeat(50_000));
        let h = highlight(&text, &query);
        assert_eq!(h.match_count(), 1);
        assert_eq!(h.spans[0].text.chars().count(), 50_000);
        assert_eq!(h.spans[1].text, "です");
        assert_eq!(h.plain_text(), text);

        let h = highlight("短い本文", &query);
        assert_eq!(h.match_count(), 0);
        assert_eq!(h.plain_text(), "短い本文");
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("English Day", "ENGLISH"));
        assert!(contains_ignore_case("文化祭です", "祭"));
        assert!(!contains_ignore_case("文化祭です", "入試"));
        assert!(!contains_ignore_case("text", ""));
    }

    #[test]
    fn test_no_match() {
        let h = highlight("進路指導", "入試");
        assert_eq!(h.match_count(), 0);
        assert_eq!(h.render("[", "]"), "進路指導");
    }
}
