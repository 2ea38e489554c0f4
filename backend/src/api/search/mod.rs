//! Search endpoint and its wire encodings.

mod search_get;
pub use search_get::search_verses_get;

mod search_post;
pub use search_post::search_verses_post;

pub mod search_params;

use common::{error::ServiceError, search_query::QueryRequest, search_result::SearchResult};

use crate::client_utils::{config::SearchVariant, scripture_client::ScriptureClient};

/// Runs `request` against whichever search flavour the client is configured for.
pub async fn search_verses(client: &ScriptureClient, request: &QueryRequest) -> Result<Vec<SearchResult>, ServiceError> {
    tracing::info!(
        "search: {:?} range={} volumes={:?} books={:?}",
        request.raw_query, request.verse_range, request.volumes, request.books
    );
    let results = match client.config().search_variant {
        SearchVariant::Get => search_verses_get(client, request).await,
        SearchVariant::Post => search_verses_post(client, request).await,
    };
    match &results {
        Ok(results) => tracing::info!("search: {} results", results.len()),
        Err(e) => tracing::error!("search: request failed: {}", e),
    }
    results
}
