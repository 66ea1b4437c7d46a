// src/http.rs
// Outbound HTTP client for generateContent calls

use std::time::Duration;

use crate::error::Result;

/// Upper bound on one generateContent call, so a hung model call ends as a 500
pub const GENERATE_TIMEOUT: Duration = Duration::from_secs(300);

pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the client every decision request shares.
///
/// Concurrent `/decision` calls reuse pooled connections to the Gemini host.
/// Requests identify themselves as `foresight/<version>`.
pub fn create_shared_client() -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(GENERATE_TIMEOUT)
        .connect_timeout(CONNECT_TIMEOUT)
        .pool_max_idle_per_host(10)
        .user_agent(concat!("foresight/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}
