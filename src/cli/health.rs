//! Health CLI command handler

use url::Url;

use crate::api::TripMateClient;
use crate::error::{Result, TripMateError};

/// Handle the health command
pub async fn handle_health(endpoint: Url) -> Result<()> {
    let client = TripMateClient::new(endpoint);
    let health = client.health().await?;

    if !health.is_ok() {
        return Err(TripMateError::RequestFailed(format!(
            "server reported status '{}'",
            health.status
        )));
    }

    println!(
        "Server at {} is healthy (status: {})",
        client.endpoint(),
        health.status
    );
    Ok(())
}
