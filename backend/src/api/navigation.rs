//! Sidebar tree: volumes, their books and chapter counts.

use common::{error::ServiceError, search_result::NavigationVolume};
use serde::Deserialize;

use crate::client_utils::scripture_client::{Envelope, ScriptureClient, unwrap_envelope};

#[derive(Debug, Deserialize)]
struct NavigationResponse {
    success: bool,
    data: Option<Vec<NavigationVolume>>,
    error: Option<String>,
}

impl Envelope for NavigationResponse {
    type Payload = Vec<NavigationVolume>;
    fn into_payload(self) -> Result<Self::Payload, ServiceError> {
        unwrap_envelope(self.success, self.data, self.error, "data")
    }
}

pub async fn fetch_navigation(client: &ScriptureClient) -> Result<Vec<NavigationVolume>, ServiceError> {
    let response: NavigationResponse = client.get_json("navigation", &()).await?;
    let volumes = response.into_payload()?;
    tracing::info!("navigation: {} volumes", volumes.len());
    Ok(volumes)
}
