use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("browser window is not available")]
    NoWindow,

    #[error("failed to build request: {0}")]
    Request(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },

    #[error("session expired or not authenticated")]
    Unauthorized,

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("failed to decode messages payload: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;

/// Renders a thrown JS value for inclusion in an error message.
pub fn describe_js(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::JSON::stringify(value)
                .ok()
                .and_then(|text| text.as_string())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}
