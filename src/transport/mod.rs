//! HTTP transport for the Seller API.
//!
//! One bounded-timeout request per operation, no retries. Non-2xx statuses
//! are returned to the caller together with the decoded body — the server's
//! error payload is displayed, not swallowed. Network and timeout failures
//! surface as errors.

use std::sync::OnceLock;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde_json::Value;
use tracing::{debug, warn};

use crate::catalog::HttpMethod;
use crate::config::Credentials;
use crate::error::Result;

/// Per-operation request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Timeout for the one-shot credential probe.
const PROBE_TIMEOUT: Duration = Duration::from_secs(15);

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the shared reqwest client.
fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client")
    })
}

/// Build the credential headers sent with every Seller API call.
pub fn seller_headers(credentials: &Credentials) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Ok(val) = HeaderValue::from_str(&credentials.client_id) {
        headers.insert("Client-Id", val);
    }
    if let Ok(val) = HeaderValue::from_str(&credentials.api_key) {
        headers.insert("Api-Key", val);
    }
    headers
}

/// A decoded server response.
#[derive(Debug)]
pub struct ApiResponse {
    pub status: u16,
    pub body: ResponseBody,
}

/// Response body: JSON when it parses, raw text otherwise.
#[derive(Debug)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    fn from_text(text: String) -> Self {
        match serde_json::from_str(&text) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(text),
        }
    }
}

/// Transport bound to one base URL and one set of credentials.
#[derive(Debug, Clone)]
pub struct SellerTransport {
    base_url: String,
    credentials: Credentials,
}

impl SellerTransport {
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            base_url: base_url.into(),
            credentials,
        }
    }

    /// Full URL for an operation path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Execute one operation call.
    ///
    /// An empty payload (`{}` or null) sends no request body. The response is
    /// returned whatever its status; only transport-level failures are errors.
    pub async fn execute(
        &self,
        method: HttpMethod,
        path: &str,
        payload: &Value,
    ) -> Result<ApiResponse> {
        let url = self.endpoint(path);
        debug!(%url, %method, "sending request");

        let mut request = shared_client()
            .request(reqwest_method(method), &url)
            .headers(seller_headers(&self.credentials))
            .timeout(REQUEST_TIMEOUT);
        if !is_empty_payload(payload) {
            request = request.json(payload);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            warn!(status, %url, "server returned an error status");
        }
        let text = response.text().await?;
        Ok(ApiResponse {
            status,
            body: ResponseBody::from_text(text),
        })
    }

    /// Probe the API with a cheap call to confirm the credentials work.
    pub async fn verify_credentials(&self) -> bool {
        let url = self.endpoint("v1/warehouse/list");
        let result = shared_client()
            .post(&url)
            .headers(seller_headers(&self.credentials))
            .json(&serde_json::json!({}))
            .timeout(PROBE_TIMEOUT)
            .send()
            .await;
        match result {
            Ok(response) => response.status() == reqwest::StatusCode::OK,
            Err(error) => {
                debug!(%error, "credential probe failed");
                false
            }
        }
    }
}

fn reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
    }
}

fn is_empty_payload(payload: &Value) -> bool {
    match payload {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn credentials() -> Credentials {
        Credentials {
            client_id: "client-1".into(),
            api_key: "key-1".into(),
        }
    }

    #[test]
    fn seller_headers_carry_credentials_and_content_type() {
        let headers = seller_headers(&credentials());

        assert_eq!(headers.get("Client-Id").unwrap(), "client-1");
        assert_eq!(headers.get("Api-Key").unwrap(), "key-1");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn endpoint_joins_base_url_and_path() {
        let transport = SellerTransport::new("https://api-seller.ozon.ru/", credentials());
        assert_eq!(
            transport.endpoint("v3/supply-order/list"),
            "https://api-seller.ozon.ru/v3/supply-order/list"
        );

        let no_slash = SellerTransport::new("http://127.0.0.1:9000", credentials());
        assert_eq!(
            no_slash.endpoint("v1/warehouse/list"),
            "http://127.0.0.1:9000/v1/warehouse/list"
        );
    }

    #[test]
    fn empty_payloads_send_no_body() {
        assert!(is_empty_payload(&json!({})));
        assert!(is_empty_payload(&Value::Null));
        assert!(!is_empty_payload(&json!({ "status": "awaiting" })));
        assert!(!is_empty_payload(&json!([1, 2])));
    }

    #[test]
    fn response_body_decodes_json_or_keeps_text() {
        let json_body = ResponseBody::from_text(r#"{"result": []}"#.to_string());
        assert!(matches!(json_body, ResponseBody::Json(_)));

        let text_body = ResponseBody::from_text("<html>gateway error</html>".to_string());
        assert!(matches!(text_body, ResponseBody::Text(_)));
    }
}
