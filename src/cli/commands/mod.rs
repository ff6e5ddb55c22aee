//! CLI Commands
//!
//! One module per subcommand. Commands that talk to the model share the
//! advisor construction path below.

pub mod config;
pub mod enhance;
pub mod insights;
pub mod recommend;
pub mod routes;

use crate::advisor::TravelAdvisor;
use crate::ai::client::{ClientConfig, create_client};
use crate::catalog::RouteCatalog;
use crate::config::ConfigLoader;
use crate::types::Result;

/// Build an advisor from merged configuration and the seeded catalog
pub(crate) fn build_advisor() -> Result<TravelAdvisor> {
    let config = ConfigLoader::load()?;
    let client = create_client(&ClientConfig::from(&config.llm))?;
    Ok(TravelAdvisor::new(client, RouteCatalog::with_seed_routes()))
}
