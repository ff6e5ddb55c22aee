//! AI enhanced-routes command

use super::build_advisor;
use crate::cli::output::{self, OutputFormat};
use crate::types::Result;

pub async fn run(
    origin: &str,
    destination: &str,
    travel_mode: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let advisor = build_advisor()?;
    let report = advisor.enhanced_routes(origin, destination, travel_mode).await?;

    match format {
        OutputFormat::Json => output::print_json(&report)?,
        OutputFormat::Text => {
            output::heading(&format!(
                "{} enhanced routes ({:?} source)",
                report.count, report.source
            ));
            for route in &report.routes {
                println!("{}", serde_json::to_string_pretty(route)?);
            }
        }
    }
    Ok(())
}
