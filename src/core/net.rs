// src/core/net.rs
// Blocking HTTP GET. One attempt per resource, transport defaults for timeouts.
// Non-2xx statuses surface as errors (ureq's default).

use std::io::Read;

use crate::error::FetchError;

const USER_AGENT: &str = concat!("roster_fetch/", env!("CARGO_PKG_VERSION"));

fn get(url: &str) -> Result<ureq::http::Response<ureq::Body>, FetchError> {
    ureq::get(url)
        .header("User-Agent", USER_AGENT)
        .call()
        .map_err(|e| FetchError::new(url, e))
}

/// GET `url` and return the body as text. Invalid UTF-8 is replaced, not
/// rejected, and the body is not size-capped.
pub fn http_get_text(url: &str) -> Result<String, FetchError> {
    let bytes = http_get_bytes(url)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// GET `url` and stream the raw body into memory.
pub fn http_get_bytes(url: &str) -> Result<Vec<u8>, FetchError> {
    let response = get(url)?;
    let mut reader = response.into_body().into_reader();
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|e| FetchError::new(url, e))?;
    Ok(buf)
}
