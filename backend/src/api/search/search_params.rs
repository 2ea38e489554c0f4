//! Wire encodings of a [`QueryRequest`] for the two `/search` flavours.

use common::{search_const::BOOKS_PARAM_SEPARATOR, search_query::QueryRequest};
use serde::Serialize;

/// Query-string pairs for `GET /search`.
///
/// `books` is always sent, empty when nothing is selected. `volumes` is only
/// sent when a volume is selected, so whole-volume searches reach services
/// that understand it while older services see the same request as before.
pub fn build_get_search_params(request: &QueryRequest) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("query", request.raw_query.clone()),
        ("verse_range", request.verse_range.to_string()),
        ("books", request.books.join(BOOKS_PARAM_SEPARATOR)),
    ];
    if !request.volumes.is_empty() {
        params.push(("volumes", request.volumes.join(BOOKS_PARAM_SEPARATOR)));
    }
    params
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostSearchBody {
    pub query: String,
    pub collections: Vec<String>,
    pub books: Vec<String>,
    pub limit: u32,
}

pub fn build_post_search_body(request: &QueryRequest, limit: u32) -> PostSearchBody {
    PostSearchBody {
        query: request.raw_query.clone(),
        collections: request.volumes.clone(),
        books: request.books.clone(),
        limit,
    }
}

#[cfg(test)]
mod tests {
    use common::filter_set::FilterSet;

    use super::*;

    fn request(range: &str, volumes: &[&str], books: &[&str]) -> QueryRequest {
        let filters = FilterSet {
            volumes: volumes.iter().map(|v| v.to_string()).collect(),
            books: books.iter().map(|b| b.to_string()).collect(),
        };
        QueryRequest::compose("faith, hope and charity", range, &filters).unwrap()
    }

    #[test]
    fn get_params_use_bare_range_and_comma_joined_books() {
        let params = build_get_search_params(&request("3", &["Old Testament"], &["Genesis", "Exodus"]));
        assert_eq!(
            params,
            vec![
                ("query", "faith, hope and charity".to_string()),
                ("verse_range", "3".to_string()),
                ("books", "Genesis,Exodus".to_string()),
                ("volumes", "Old Testament".to_string()),
            ]
        );
    }

    #[test]
    fn get_params_send_chapter_literally_and_skip_empty_volumes() {
        let params = build_get_search_params(&request("chapter", &[], &[]));
        assert_eq!(params[1], ("verse_range", "chapter".to_string()));
        assert_eq!(params[2], ("books", String::new()));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn post_body_maps_volumes_to_collections() {
        let body = build_post_search_body(&request("1", &["New Testament"], &["John"]), 50);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "query": "faith, hope and charity",
                "collections": ["New Testament"],
                "books": ["John"],
                "limit": 50,
            })
        );
    }
}
