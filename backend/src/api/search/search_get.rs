//! `GET /search` variant.

use common::{error::ServiceError, search_query::QueryRequest, search_result::SearchResult};
use serde::Deserialize;

use crate::api::search::search_params::build_get_search_params;
use crate::client_utils::scripture_client::{Envelope, ScriptureClient, unwrap_envelope};

#[derive(Debug, Deserialize)]
struct GetSearchResponse {
    success: bool,
    results: Option<Vec<SearchResult>>,
    error: Option<String>,
}

impl Envelope for GetSearchResponse {
    type Payload = Vec<SearchResult>;
    fn into_payload(self) -> Result<Self::Payload, ServiceError> {
        unwrap_envelope(self.success, self.results, self.error, "results")
    }
}

pub async fn search_verses_get(client: &ScriptureClient, request: &QueryRequest) -> Result<Vec<SearchResult>, ServiceError> {
    let params = build_get_search_params(request);
    let response: GetSearchResponse = client.get_json("search", &params).await?;
    response.into_payload()
}
