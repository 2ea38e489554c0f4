//! Search request composed from the query text, verse range and filters.

use serde::{Deserialize, Serialize};

use crate::{
    error::QueryError,
    filter_set::{BookName, FilterSet, VolumeName},
    search_terms::{SearchTerm, parse_search_terms},
    verse_range::VerseRange,
};

/// One search submission. Built fresh for every search and sent once.
///
/// Wire encodings (GET query string, POST body) are produced by the
/// collaborator client, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub raw_query: String,
    pub verse_range: VerseRange,
    pub volumes: Vec<VolumeName>,
    pub books: Vec<BookName>,
}

impl QueryRequest {
    /// `verse_range` is the picker value: `"1"` to `"5"` or `"chapter"`.
    pub fn compose(raw_query: &str, verse_range: &str, filter_set: &FilterSet) -> Result<Self, QueryError> {
        if raw_query.trim().is_empty() {
            return Err(QueryError::NoQuery);
        }
        let verse_range = verse_range.parse::<VerseRange>()?;
        Ok(Self {
            raw_query: raw_query.to_string(),
            verse_range,
            volumes: filter_set.volumes.clone(),
            books: filter_set.books.clone(),
        })
    }

    /// Search from the quick-search bar: single verse, everything searched.
    pub fn quick(raw_query: &str) -> Result<Self, QueryError> {
        Self::compose(raw_query, &VerseRange::default().to_string(), &FilterSet::default())
    }

    pub fn terms(&self) -> Vec<SearchTerm> {
        parse_search_terms(&self.raw_query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_is_rejected() {
        assert_eq!(QueryRequest::compose("", "1", &FilterSet::default()), Err(QueryError::NoQuery));
        assert_eq!(QueryRequest::compose("  \n", "chapter", &FilterSet::default()), Err(QueryError::NoQuery));
        assert_eq!(QueryRequest::quick(" "), Err(QueryError::NoQuery));
    }

    #[test]
    fn empty_query_wins_over_bad_range() {
        assert_eq!(QueryRequest::compose("", "42", &FilterSet::default()), Err(QueryError::NoQuery));
    }

    #[test]
    fn chapter_range_with_volume_filter() {
        let filters = FilterSet { volumes: vec!["New Testament".into()], books: vec![] };
        let request = QueryRequest::compose("light", "chapter", &filters).unwrap();

        assert_eq!(request.raw_query, "light");
        assert_eq!(request.verse_range, VerseRange::Chapter);
        assert_eq!(request.volumes, vec!["New Testament"]);
        assert!(request.books.is_empty());
    }

    #[test]
    fn out_of_range_is_a_caller_error() {
        let result = QueryRequest::compose("light", "7", &FilterSet::default());
        assert_eq!(result, Err(QueryError::InvalidRange("7".into())));
    }

    #[test]
    fn filter_order_is_preserved() {
        let filters = FilterSet {
            volumes: vec!["Old Testament".into(), "Book of Mormon".into()],
            books: vec!["Isaiah".into(), "Alma".into(), "Genesis".into()],
        };
        let request = QueryRequest::compose("faith, hope", "3", &filters).unwrap();

        assert_eq!(request.volumes, filters.volumes);
        assert_eq!(request.books, filters.books);
        assert_eq!(request.terms().len(), 2);
    }

    #[test]
    fn quick_search_uses_defaults() {
        let request = QueryRequest::quick("charity").unwrap();
        assert_eq!(request.verse_range, VerseRange::One);
        assert!(request.volumes.is_empty() && request.books.is_empty());
    }
}
