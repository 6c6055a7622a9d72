//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the endpoint is only
//! called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics; a failed conversion keeps
//! the previous output on screen and surfaces the message as a notice.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use wire::ConversionResult;
use wire::ConversionRequest;

#[cfg(any(test, feature = "hydrate"))]
fn conversion_failed_message(status: u16) -> String {
    format!("conversion failed: {status}")
}

/// Outcome of a response whose body decoded to `body`, or failed to decode.
#[cfg(any(test, feature = "hydrate"))]
fn response_result(status: u16, body: Option<ConversionResult>) -> Result<String, String> {
    body.map_or_else(|| Err(conversion_failed_message(status)), ConversionResult::into_result)
}

/// Convert SVG markup via `POST /api/svg-to-jsx`.
///
/// # Errors
///
/// Returns the server's `message` for rejected input, or a transport error
/// description when the request or response decoding fails.
pub async fn convert_svg(request: &ConversionRequest) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(wire::CONVERT_ENDPOINT)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = resp.status();
        response_result(status, resp.json::<ConversionResult>().await.ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}
