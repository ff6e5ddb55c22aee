//! AI journey recommendations command

use super::build_advisor;
use crate::ai::normalize::shape;
use crate::cli::output::{self, OutputFormat};
use crate::types::{Preferences, Result};

pub async fn run(
    origin: &str,
    destination: &str,
    preferences: Preferences,
    format: OutputFormat,
) -> Result<()> {
    let advisor = build_advisor()?;
    let prefs = (!preferences.is_empty()).then_some(&preferences);
    let report = advisor
        .journey_recommendations(origin, destination, prefs)
        .await?;

    match format {
        OutputFormat::Json => output::print_json(&report)?,
        OutputFormat::Text => {
            output::heading(&format!(
                "Recommendations for {} -> {}",
                report.origin, report.destination
            ));
            println!();
            output::print_normalized(&report.recommendations, &shape::RECOMMENDATIONS);
        }
    }
    Ok(())
}
