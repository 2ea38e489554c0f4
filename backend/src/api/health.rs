//! Connectivity probe.

use common::error::ServiceError;

use crate::client_utils::scripture_client::ScriptureClient;

pub async fn check_health(client: &ScriptureClient) -> Result<(), ServiceError> {
    let status = client.get_status("health").await?;
    if status.is_success() {
        Ok(())
    } else {
        Err(ServiceError::Transport(format!("health check answered {status}")))
    }
}
