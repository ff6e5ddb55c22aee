//! Catalog listing and journey search

use crate::catalog::RouteCatalog;
use crate::cli::output::{self, OutputFormat};
use crate::types::{Result, SageError};

/// List every route in the catalog
pub fn list(format: OutputFormat) -> Result<()> {
    let catalog = RouteCatalog::with_seed_routes();
    match format {
        OutputFormat::Json => output::print_json(&catalog.all())?,
        OutputFormat::Text => {
            output::heading(&format!("{} routes", catalog.all().len()));
            output::print_routes(catalog.all());
        }
    }
    Ok(())
}

/// Find routes for a journey
pub fn find(origin: &str, destination: &str, format: OutputFormat) -> Result<()> {
    let catalog = RouteCatalog::with_seed_routes();
    let routes = catalog.find_journey(origin, destination);
    if routes.is_empty() {
        return Err(SageError::RouteNotFound(format!(
            "{} to {}",
            origin, destination
        )));
    }

    match format {
        OutputFormat::Json => output::print_json(&routes)?,
        OutputFormat::Text => {
            output::heading(&format!(
                "{} routes for {} -> {}",
                routes.len(),
                origin,
                destination
            ));
            output::print_routes(&routes);
        }
    }
    Ok(())
}
