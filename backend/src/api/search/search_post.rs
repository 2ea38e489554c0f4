//! `POST /search` variant, used by the alternate backend.

use common::{error::ServiceError, search_query::QueryRequest, search_result::SearchResult};
use serde::Deserialize;

use crate::api::search::search_params::build_post_search_body;
use crate::client_utils::scripture_client::ScriptureClient;

#[derive(Debug, Deserialize)]
struct PostSearchResponse {
    results: Vec<PostSearchHit>,
}

#[derive(Debug, Deserialize)]
struct PostSearchHit {
    book: String,
    chapter: u32,
    verse: u32,
    #[serde(default)]
    collection: Option<String>,
    text: String,
}

impl From<PostSearchHit> for SearchResult {
    fn from(hit: PostSearchHit) -> Self {
        SearchResult {
            book_title: hit.book,
            chapter_number: hit.chapter,
            verse_number: hit.verse,
            highlighted_text: hit.text,
            collection: hit.collection,
        }
    }
}

pub async fn search_verses_post(client: &ScriptureClient, request: &QueryRequest) -> Result<Vec<SearchResult>, ServiceError> {
    let body = build_post_search_body(request, client.config().search_limit);
    let response: PostSearchResponse = client.post_json("search", &body).await?;
    Ok(response.results.into_iter().map(SearchResult::from).collect())
}
