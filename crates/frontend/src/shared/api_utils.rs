//! HTTP helpers shared by the feature `api.rs` modules.
//!
//! All requests normalize failures into a human-readable `String` so pages
//! can drop them straight into an error banner.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// GET a JSON resource.
pub async fn get_json<T>(url: &str) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("No response from server: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST a JSON body where only success/failure matters.
pub async fn post_json_unit<B>(url: &str, body: &B) -> Result<(), String>
where
    B: Serialize,
{
    let response = Request::post(url)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("No response from server: {}", e))?;

    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }
    Ok(())
}
