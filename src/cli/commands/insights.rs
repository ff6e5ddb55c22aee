//! AI route insights command

use super::build_advisor;
use crate::ai::normalize::shape;
use crate::cli::output::{self, OutputFormat};
use crate::types::Result;

pub async fn run(route_id: &str, format: OutputFormat) -> Result<()> {
    let advisor = build_advisor()?;
    let report = advisor.route_insights(route_id).await?;

    match format {
        OutputFormat::Json => output::print_json(&report)?,
        OutputFormat::Text => {
            output::heading(&format!(
                "Insights for {} -> {}",
                report.route.origin, report.route.destination
            ));
            println!();
            output::print_normalized(&report.insights, &shape::INSIGHTS);
        }
    }
    Ok(())
}
