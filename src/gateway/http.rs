use super::GatewayError;
use reqwest::blocking::{Client, Response};
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(30);

pub(crate) fn client() -> Client {
    Client::builder().timeout(TIMEOUT).build().unwrap_or_else(|e| {
        log::warn!("HTTP client builder failed ({e}), using defaults");
        Client::new()
    })
}

/// Turns a non-2xx response into [`GatewayError::Status`] with a short body excerpt.
pub(crate) fn ensure_success(response: Response) -> Result<Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(GatewayError::Status {
        status: status.as_u16(),
        body: body.trim().chars().take(300).collect(),
    })
}
