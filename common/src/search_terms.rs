//! Splits the free-text query into word and phrase terms.
//!
//! Parsing is a naive comma split. It is cheap enough to run on every
//! keystroke for the live term chips under the search box.

use serde::{Deserialize, Serialize};

/// Separator used when terms are written back into the query box.
pub const TERM_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTerm {
    pub text: String,
    pub is_phrase: bool,
}

impl SearchTerm {
    fn from_fragment(fragment: &str) -> Self {
        Self {
            text: fragment.to_string(),
            is_phrase: fragment.contains(' ') && fragment.split_whitespace().count() > 1,
        }
    }

    pub fn kind_label(&self) -> &'static str {
        if self.is_phrase { "phrase" } else { "word" }
    }
}

/// Parses `query` into terms, in order of appearance, without deduplication.
pub fn parse_search_terms(query: &str) -> Vec<SearchTerm> {
    if query.trim().is_empty() {
        return vec![];
    }
    query
        .split(',')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(SearchTerm::from_fragment)
        .collect()
}

pub fn join_search_terms(terms: &[SearchTerm]) -> String {
    terms
        .iter()
        .map(|term| term.text.as_str())
        .collect::<Vec<_>>()
        .join(TERM_SEPARATOR)
}

/// Normalizes comma spacing and drops empty fragments.
pub fn canonicalize_query(query: &str) -> String {
    join_search_terms(&parse_search_terms(query))
}

/// Removes the term at `index` (its position in the current parse) and
/// returns the re-serialized query.
pub fn remove_search_term(query: &str, index: usize) -> String {
    let mut terms = parse_search_terms(query);
    if index < terms.len() {
        terms.remove(index);
    }
    join_search_terms(&terms)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(terms: &[SearchTerm]) -> Vec<&str> {
        terms.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn blank_input_has_no_terms() {
        assert!(parse_search_terms("").is_empty());
        assert!(parse_search_terms("   \t ").is_empty());
        assert!(parse_search_terms(" , ,, ").is_empty());
    }

    #[test]
    fn words_and_phrases_are_classified() {
        let terms = parse_search_terms("faith, hope and charity");
        assert_eq!(
            terms,
            vec![
                SearchTerm { text: "faith".into(), is_phrase: false },
                SearchTerm { text: "hope and charity".into(), is_phrase: true },
            ]
        );
        assert_eq!(terms[0].kind_label(), "word");
        assert_eq!(terms[1].kind_label(), "phrase");
    }

    #[test]
    fn order_is_kept_and_duplicates_survive() {
        let terms = parse_search_terms("light ,  dark,light,,  pure   love ");
        assert_eq!(texts(&terms), vec!["light", "dark", "light", "pure   love"]);
        assert!(terms.iter().all(|t| !t.text.is_empty() && t.text == t.text.trim()));
        assert!(terms[3].is_phrase);
    }

    #[test]
    fn only_a_plain_space_makes_a_phrase() {
        let terms = parse_search_terms("hope\tcharity, a\u{00A0}b, c d");
        assert_eq!(terms.iter().map(|t| t.is_phrase).collect::<Vec<_>>(), vec![false, false, true]);
    }

    #[test]
    fn canonical_form_normalizes_comma_spacing() {
        assert_eq!(canonicalize_query("  a,b ,  c d,, "), "a, b, c d");
        assert_eq!(canonicalize_query(""), "");
    }

    #[test]
    fn removing_a_term_keeps_the_rest_in_order() {
        let query = "faith,hope and charity ,  grace";
        let reduced = remove_search_term(query, 1);
        assert_eq!(reduced, "faith, grace");

        let reparsed = parse_search_terms(&reduced);
        assert_eq!(texts(&reparsed), vec!["faith", "grace"]);
    }

    #[test]
    fn removing_the_last_term_empties_the_query() {
        assert_eq!(remove_search_term("mercy", 0), "");
    }

    #[test]
    fn removing_out_of_range_returns_canonical_query() {
        assert_eq!(remove_search_term("a ,b", 5), "a, b");
    }
}
