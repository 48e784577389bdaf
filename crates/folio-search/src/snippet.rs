//! Result snippets and match highlighting.

use pulldown_cmark_escape::{escape_html, FmtWriter};
use regex::{Regex, RegexBuilder};

/// Share of the snippet placed before the match.
const LEAD_DIVISOR: usize = 4;

/// Cut a window of at most `max_chars` characters from `text` around the
/// first case-insensitive occurrence of `query`.
///
/// Without a match the window starts at the beginning. An ellipsis marks
/// each side that was cut.
///
/// ```
/// use folio_search::snippet::snippet;
///
/// assert_eq!(snippet("short text", "text", 50), "short text");
/// assert_eq!(snippet("abcdefghij", "zzz", 4), "abcd…");
/// ```
pub fn snippet(text: &str, query: &str, max_chars: usize) -> String {
    let text = text.trim();
    if max_chars == 0 || text.is_empty() {
        return String::new();
    }

    let start = match query_regex(query).and_then(|re| re.find(text)) {
        Some(m) => {
            let before = text[..m.start()].chars().count();
            let skip = before.saturating_sub(max_chars / LEAD_DIVISOR);
            text.char_indices().nth(skip).map_or(0, |(i, _)| i)
        }
        None => 0,
    };

    let rest = &text[start..];
    let end = rest.char_indices().nth(max_chars).map_or(rest.len(), |(i, _)| i);

    let mut out = String::with_capacity(end + 8);
    if start > 0 {
        out.push('…');
    }
    out.push_str(&rest[..end]);
    if end < rest.len() {
        out.push('…');
    }
    out
}

/// HTML-escape `text`, wrapping every case-insensitive occurrence of
/// `query` in `<mark>`.
///
/// The query is matched literally; regex metacharacters carry no meaning.
///
/// ```
/// use folio_search::snippet::highlight_matches;
///
/// assert_eq!(highlight_matches("A+B and a+b", "a+b"), "<mark>A+B</mark> and <mark>a+b</mark>");
/// ```
pub fn highlight_matches(text: &str, query: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let Some(re) = query_regex(query) else {
        push_escaped(&mut out, text);
        return out;
    };

    let mut last = 0;
    for m in re.find_iter(text) {
        push_escaped(&mut out, &text[last..m.start()]);
        out.push_str("<mark>");
        push_escaped(&mut out, m.as_str());
        out.push_str("</mark>");
        last = m.end();
    }
    push_escaped(&mut out, &text[last..]);
    out
}

fn query_regex(query: &str) -> Option<Regex> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .map_err(|e| log::debug!("Unusable highlight pattern for {query:?}: {e}"))
        .ok()
}

fn push_escaped(out: &mut String, text: &str) {
    // Writing into a String cannot fail.
    let _ = escape_html(FmtWriter(&mut *out), text);
}
