//! Interactive console for the Ozon Seller API.
//!
//! Presents the supported Seller API operations as a numbered menu and builds
//! each request payload through schema-driven prompts instead of hand-written
//! JSON: objects field by field, arrays element by element, primitives with
//! type coercion, enum hints, and defaults.
//!
//! # Quick Start
//!
//! ```no_run
//! use ozon_cli::catalog::Catalog;
//! use ozon_cli::config::OzonConfig;
//! use ozon_cli::console::StdioPrompt;
//!
//! # async fn example() -> ozon_cli::error::Result<()> {
//! let catalog = Catalog::builtin();
//! let config = OzonConfig::from_env();
//! ozon_cli::session::run(&mut StdioPrompt, &catalog, config).await?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod schema;
pub mod session;
pub mod transport;
