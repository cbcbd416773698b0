//! Configuration (layered: flags > env > interactive prompt).

/// Default Seller API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api-seller.ozon.ru/";

/// Partial configuration collected from one layer (CLI flags or environment).
///
/// Values missing from every layer are prompted for interactively by the
/// session.
#[derive(Debug, Clone, Default)]
pub struct OzonConfig {
    pub client_id: Option<String>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

impl OzonConfig {
    /// Load from environment variables (OZON_CLIENT_ID, OZON_API_KEY,
    /// OZON_BASE_URL), reading a `.env` file first when present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        Self {
            client_id: std::env::var("OZON_CLIENT_ID").ok(),
            api_key: std::env::var("OZON_API_KEY").ok(),
            base_url: std::env::var("OZON_BASE_URL").ok(),
        }
    }

    /// Overlay another layer on top of this one; values in `other` win.
    pub fn overlay(self, other: Self) -> Self {
        Self {
            client_id: other.client_id.or(self.client_id),
            api_key: other.api_key.or(self.api_key),
            base_url: other.base_url.or(self.base_url),
        }
    }

    /// The effective base URL.
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }
}

/// Resolved Seller API credentials, sent as headers with every call.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub api_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_prefers_the_upper_layer() {
        let env = OzonConfig {
            client_id: Some("env-id".into()),
            api_key: Some("env-key".into()),
            base_url: None,
        };
        let flags = OzonConfig {
            client_id: Some("flag-id".into()),
            api_key: None,
            base_url: Some("http://localhost:8080/".into()),
        };

        let merged = env.overlay(flags);

        assert_eq!(merged.client_id.as_deref(), Some("flag-id"));
        assert_eq!(merged.api_key.as_deref(), Some("env-key"));
        assert_eq!(merged.base_url.as_deref(), Some("http://localhost:8080/"));
    }

    #[test]
    fn base_url_defaults_to_the_seller_api() {
        let config = OzonConfig::default();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }
}
