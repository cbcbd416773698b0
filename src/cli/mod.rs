//! Command-line arguments for the console binary.

use clap::Parser;

use crate::config::OzonConfig;

/// Interactive console for the Ozon Seller API.
#[derive(Parser, Debug)]
#[command(name = "ozon-cli", version, about = "Interactive console for the Ozon Seller API")]
pub struct Cli {
    /// Seller account Client-Id (falls back to OZON_CLIENT_ID, then a prompt)
    #[arg(long)]
    pub client_id: Option<String>,

    /// Seller account Api-Key (falls back to OZON_API_KEY, then a prompt)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Override the API base URL (falls back to OZON_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,
}

impl Cli {
    /// The configuration layer provided by the flags.
    pub fn into_config(self) -> OzonConfig {
        OzonConfig {
            client_id: self.client_id,
            api_key: self.api_key,
            base_url: self.base_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_with_no_flags() {
        let cli = Cli::try_parse_from(["ozon-cli"]).unwrap();
        assert!(cli.client_id.is_none());
        assert!(cli.api_key.is_none());
        assert!(cli.base_url.is_none());
    }

    #[test]
    fn parse_with_all_flags() {
        let cli = Cli::try_parse_from([
            "ozon-cli",
            "--client-id",
            "12345",
            "--api-key",
            "secret",
            "--base-url",
            "http://localhost:9000/",
        ])
        .unwrap();

        assert_eq!(cli.client_id.as_deref(), Some("12345"));
        assert_eq!(cli.api_key.as_deref(), Some("secret"));
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:9000/"));
    }

    #[test]
    fn parse_unknown_flag_is_error() {
        assert!(Cli::try_parse_from(["ozon-cli", "--token", "x"]).is_err());
    }

    #[test]
    fn flags_become_a_config_layer() {
        let cli = Cli::try_parse_from(["ozon-cli", "--client-id", "12345"]).unwrap();
        let config = cli.into_config();

        assert_eq!(config.client_id.as_deref(), Some("12345"));
        assert!(config.api_key.is_none());
    }
}
