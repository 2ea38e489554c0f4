//! Volume -> book names, used by the filter picker.

use common::{error::ServiceError, filter_set::BookMetadata};
use serde::Deserialize;

use crate::client_utils::scripture_client::{Envelope, ScriptureClient, unwrap_envelope};

#[derive(Debug, Deserialize)]
struct BookMetadataResponse {
    success: bool,
    data: Option<BookMetadata>,
    error: Option<String>,
}

impl Envelope for BookMetadataResponse {
    type Payload = BookMetadata;
    fn into_payload(self) -> Result<Self::Payload, ServiceError> {
        unwrap_envelope(self.success, self.data, self.error, "data")
    }
}

pub async fn fetch_book_metadata(client: &ScriptureClient) -> Result<BookMetadata, ServiceError> {
    let response: BookMetadataResponse = client.get_json("book-metadata", &()).await?;
    response.into_payload()
}
