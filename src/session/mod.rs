//! Interactive session: banner, credential entry, menu loop, dispatch.
//!
//! A failed operation attempt prints a human-readable message and returns
//! control to the menu; nothing the operator types can crash the process.
//! Each payload build starts from scratch, so a failed attempt leaves no
//! state behind for the next one.

use serde_json::Value;
use tracing::info;

use crate::builder::PayloadBuilder;
use crate::catalog::{Catalog, Operation};
use crate::config::{Credentials, OzonConfig};
use crate::console::PromptSource;
use crate::error::{OzonCliError, Result};
use crate::transport::{ResponseBody, SellerTransport};

const BANNER: &str = "\
==============================
Welcome to the Ozon Seller API console
==============================
This console bundles the core Seller API operations and guides you
through each request with input prompts.";

/// Run one interactive session until the operator exits.
pub async fn run<P: PromptSource>(
    prompts: &mut P,
    catalog: &Catalog,
    config: OzonConfig,
) -> Result<()> {
    prompts.announce(BANNER)?;

    let credentials = resolve_credentials(prompts, &config)?;
    let transport = SellerTransport::new(config.base_url(), credentials);

    prompts.announce("Verifying credentials...")?;
    if !transport.verify_credentials().await {
        return Err(OzonCliError::Authentication(
            "could not confirm the key; check the credentials and try again".to_string(),
        ));
    }
    prompts.announce("Key confirmed. Loading the operation list...")?;

    if catalog.is_empty() {
        return Err(OzonCliError::Configuration(
            "the operation catalog is empty".to_string(),
        ));
    }

    loop {
        let Some(name) = choose_operation(prompts, catalog)? else {
            prompts.announce("Goodbye!")?;
            return Ok(());
        };
        let Some(operation) = catalog.get(&name) else {
            continue;
        };
        if let Err(error) = run_operation(prompts, &transport, &name, operation).await {
            prompts.announce(&format!("Operation failed: {error}"))?;
        }
    }
}

/// Resolve credentials from the configuration, prompting for missing values.
/// Both must be non-empty.
pub fn resolve_credentials<P: PromptSource>(
    prompts: &mut P,
    config: &OzonConfig,
) -> Result<Credentials> {
    let client_id = match &config.client_id {
        Some(value) => value.trim().to_string(),
        None => prompts.prompt("Enter Client-Id: ")?.trim().to_string(),
    };
    let api_key = match &config.api_key {
        Some(value) => value.trim().to_string(),
        None => prompts.prompt("Enter Api-Key: ")?.trim().to_string(),
    };
    if client_id.is_empty() || api_key.is_empty() {
        return Err(OzonCliError::Configuration(
            "both Client-Id and Api-Key are required".to_string(),
        ));
    }
    Ok(Credentials { client_id, api_key })
}

/// Show the numbered menu and read a selection.
///
/// Returns `None` when the operator exits with an empty line. Invalid
/// selections (non-numeric or out of range) re-prompt.
pub fn choose_operation<P: PromptSource>(
    prompts: &mut P,
    catalog: &Catalog,
) -> Result<Option<String>> {
    prompts.announce("Available operations:")?;
    let mut names = Vec::new();
    for (index, (name, operation)) in catalog.entries().enumerate() {
        prompts.announce(&format!(
            "  {}. {} - {}",
            index + 1,
            name,
            operation.summary
        ))?;
        names.push(name);
    }

    loop {
        let raw = prompts.prompt("Select an operation number (or press Enter to exit): ")?;
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        let Ok(index) = raw.parse::<usize>() else {
            prompts.announce("Enter a valid number.")?;
            continue;
        };
        if index < 1 || index > names.len() {
            prompts.announce("Number out of range.")?;
            continue;
        }
        return Ok(Some(names[index - 1].to_string()));
    }
}

/// Build the payload for one operation, send it, and display the exchange.
async fn run_operation<P: PromptSource>(
    prompts: &mut P,
    transport: &SellerTransport,
    name: &str,
    operation: &Operation,
) -> Result<()> {
    let payload = PayloadBuilder::new(prompts).build_payload(operation.schema.as_ref())?;

    prompts.announce("")?;
    prompts.announce("Formed request:")?;
    prompts.announce(&format!("{} {}", operation.method, transport.endpoint(name)))?;
    prompts.announce(&pretty_json(&payload)?)?;

    info!(operation = name, "executing operation");
    let response = transport.execute(operation.method, name, &payload).await?;

    prompts.announce("")?;
    prompts.announce("Server response:")?;
    match &response.body {
        ResponseBody::Json(value) => prompts.announce(&pretty_json(value)?)?,
        ResponseBody::Text(text) => prompts.announce(text)?,
    }
    Ok(())
}

fn pretty_json(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(OzonCliError::Serialization)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedPrompt;

    #[test]
    fn empty_selection_exits_the_menu() {
        let catalog = Catalog::builtin();
        let mut prompts = ScriptedPrompt::new([""]);

        let choice = choose_operation(&mut prompts, &catalog).unwrap();

        assert_eq!(choice, None);
    }

    #[test]
    fn menu_lists_operations_with_numbers_and_summaries() {
        let catalog = Catalog::builtin();
        let mut prompts = ScriptedPrompt::new(["1"]);

        let choice = choose_operation(&mut prompts, &catalog).unwrap();

        assert_eq!(choice.as_deref(), Some("v1/analytics/stocks"));
        assert!(prompts
            .shown()
            .iter()
            .any(|line| line == "  1. v1/analytics/stocks - Stock analytics across warehouses"));
    }

    #[test]
    fn non_numeric_selection_reprompts() {
        let catalog = Catalog::builtin();
        let mut prompts = ScriptedPrompt::new(["abc", "2"]);

        let choice = choose_operation(&mut prompts, &catalog).unwrap();

        assert_eq!(choice.as_deref(), Some("v3/supply-order/get"));
        assert!(prompts
            .shown()
            .iter()
            .any(|line| line == "Enter a valid number."));
    }

    #[test]
    fn out_of_range_selection_reprompts() {
        let catalog = Catalog::builtin();
        let mut prompts = ScriptedPrompt::new(["0", "99", "3"]);

        let choice = choose_operation(&mut prompts, &catalog).unwrap();

        assert_eq!(choice.as_deref(), Some("v3/supply-order/list"));
        let rejections = prompts
            .shown()
            .iter()
            .filter(|line| *line == "Number out of range.")
            .count();
        assert_eq!(rejections, 2);
    }

    #[test]
    fn credentials_come_from_config_without_prompting() {
        let config = OzonConfig {
            client_id: Some("12345".into()),
            api_key: Some("secret".into()),
            base_url: None,
        };
        let mut prompts = ScriptedPrompt::new(Vec::<String>::new());

        let credentials = resolve_credentials(&mut prompts, &config).unwrap();

        assert_eq!(credentials.client_id, "12345");
        assert_eq!(credentials.api_key, "secret");
        assert!(prompts.shown().is_empty());
    }

    #[test]
    fn missing_credentials_are_prompted_for() {
        let config = OzonConfig::default();
        let mut prompts = ScriptedPrompt::new(["  12345  ", "secret"]);

        let credentials = resolve_credentials(&mut prompts, &config).unwrap();

        assert_eq!(credentials.client_id, "12345");
        assert_eq!(credentials.api_key, "secret");
        assert_eq!(prompts.shown(), ["Enter Client-Id: ", "Enter Api-Key: "]);
    }

    #[test]
    fn empty_credentials_are_a_configuration_error() {
        let config = OzonConfig::default();
        let mut prompts = ScriptedPrompt::new(["", ""]);

        let error = resolve_credentials(&mut prompts, &config).unwrap_err();

        assert!(matches!(error, OzonCliError::Configuration(_)));
    }
}
