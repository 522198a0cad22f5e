use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, RequestMode, Response};

use crate::error::{describe_js, DashboardError, Result};
use crate::models::{Label, MessagesResponse};

const UNAUTHORIZED: u16 = 401;

pub fn messages_url(endpoint: &str, filter: Option<Label>) -> String {
    match filter {
        Some(label) => {
            let separator = if endpoint.contains('?') { '&' } else { '?' };
            format!("{endpoint}{separator}label={}", label.as_str())
        }
        None => endpoint.to_string(),
    }
}

pub fn check_status(status: u16) -> Result<()> {
    match status {
        200..=299 => Ok(()),
        UNAUTHORIZED => Err(DashboardError::Unauthorized),
        _ => Err(DashboardError::Status { status }),
    }
}

/// `GET` the message list with the session cookie attached.
pub async fn fetch_messages(endpoint: &str, filter: Option<Label>) -> Result<MessagesResponse> {
    let window = web_sys::window().ok_or(DashboardError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    opts.set_credentials(RequestCredentials::Include);

    let url = messages_url(endpoint, filter);
    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|error| DashboardError::Request(describe_js(&error)))?;

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|error| DashboardError::Network(describe_js(&error)))?;

    let response = response_value
        .dyn_into::<Response>()
        .map_err(|_| DashboardError::Network("fetch did not yield a Response".to_string()))?;

    check_status(response.status())?;

    let body = response
        .json()
        .map_err(|error| DashboardError::Body(describe_js(&error)))?;
    let json = JsFuture::from(body)
        .await
        .map_err(|error| DashboardError::Body(describe_js(&error)))?;

    serde_wasm_bindgen::from_value::<MessagesResponse>(json)
        .map_err(|error| DashboardError::Decode(error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfiltered_url_has_no_query() {
        assert_eq!(messages_url("/get_messages", None), "/get_messages");
    }

    #[test]
    fn filtered_urls_carry_label() {
        assert_eq!(
            messages_url("/get_messages", Some(Label::Suspicious)),
            "/get_messages?label=suspicious"
        );
        assert_eq!(
            messages_url("/get_messages", Some(Label::Safe)),
            "/get_messages?label=safe"
        );
        assert_eq!(
            messages_url("/api?v=2", Some(Label::Safe)),
            "/api?v=2&label=safe"
        );
    }

    #[test]
    fn status_classification() {
        assert!(check_status(200).is_ok());
        assert!(check_status(204).is_ok());
        assert!(matches!(check_status(401), Err(DashboardError::Unauthorized)));
        assert!(matches!(
            check_status(500),
            Err(DashboardError::Status { status: 500 })
        ));
    }
}
