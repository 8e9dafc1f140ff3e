//! Board Endpoint
//!
//! One `GET` through the browser `fetch` API; no retry, no timeout.

use board_core::BoardData;
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::error::{js_error_message, FetchError};

fn network(err: wasm_bindgen::JsValue) -> FetchError {
    FetchError::Network(js_error_message(&err))
}

/// Fetch tickets and users from `endpoint`
pub async fn fetch_board(endpoint: &str) -> Result<BoardData, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_mode(RequestMode::Cors);
    let request = Request::new_with_str_and_init(endpoint, &init).map_err(network)?;
    request.headers().set("Accept", "application/json").map_err(network)?;

    debug!(endpoint, "fetching board");
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network)?
        .dyn_into()
        .map_err(network)?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body = JsFuture::from(response.text().map_err(network)?).await.map_err(network)?;
    let text = body.as_string().unwrap_or_default();
    decode_board(&text)
}

fn decode_board(text: &str) -> Result<BoardData, FetchError> {
    Ok(serde_json::from_str(text)?)
}
