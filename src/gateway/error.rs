use thiserror::Error;

/// Errors a gateway call can run into internally.
///
/// These never cross the gateway boundary: every public operation converts
/// them into its fallback value and logs the cause.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Connection, timeout, or body/decode failure from the HTTP client.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Catalog API returned status {status}")]
    UnexpectedStatus { status: u16 },
}
