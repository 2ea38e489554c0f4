use axum::{body::Body, response::{IntoResponse, Response}};
use reqwest::StatusCode;
use tracing::info;

use crate::{api::health::check_health, client_utils::scripture_client::get_scripture_client};

async fn _collaborator_health() -> anyhow::Result<impl IntoResponse> {
    let client = get_scripture_client()?;
    info!("Probing scripture service at {}", client.config().base_url);
    check_health(&client).await?;
    Ok((StatusCode::OK, Body::from("ok")))
}

/// `GET /_collaborator_health`: 200 when the scripture service answers its
/// health probe, 502 otherwise.
pub async fn collaborator_health() -> Response {
    match _collaborator_health().await {
        Ok(response) => response.into_response(),
        Err(e) => {
            tracing::error!("collaborator_health: probe failed: {:#?}", e);
            (StatusCode::BAD_GATEWAY, Body::from(e.to_string())).into_response()
        }
    }
}
