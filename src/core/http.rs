//! HTTP utilities shared by the feed and narration clients

use crate::Result;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use std::time::Duration;

const USER_AGENT: &str = concat!("match-analyst/", env!("CARGO_PKG_VERSION"));

/// Default headers sent with every request.
pub fn default_header_map() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

/// Build the single HTTP client used for the whole process.
pub fn build_client(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(default_header_map())
        .timeout(timeout)
        .build()?;
    Ok(client)
}
