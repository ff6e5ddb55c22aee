//! CLI Output Rendering
//!
//! Styled text and JSON rendering for command results.

use clap::ValueEnum;
use console::style;
use serde::Serialize;

use crate::ai::normalize::{NormalizedResult, Shape};
use crate::types::{Result, RouteRecord};

/// Output format selector shared by all commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable styled text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Print any serializable report as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a bold section heading
pub fn heading(text: &str) {
    println!("{}", style(text).bold());
}

/// Print a labeled value line
pub fn field(label: &str, value: &str) {
    println!("  {} {}", style(format!("{}:", label)).cyan(), value);
}

/// Print a dimmed note line
pub fn note(text: &str) {
    println!("{}", style(text).dim());
}

/// Render a normalized result as labeled sections, skipping empty fields
pub fn print_normalized(result: &NormalizedResult, shape: &Shape) {
    for field in shape.fields {
        if let Some(value) = result.get(field.key)
            && !value.is_empty()
        {
            println!("{}", style(field.label).bold());
            println!("  {}\n", value);
        }
    }
    if result.is_fallback() {
        note("(the model's reply could not be parsed; showing a raw excerpt)");
    }
}

/// Render routes as an aligned listing
pub fn print_routes(routes: &[RouteRecord]) {
    for route in routes {
        println!(
            "{}  {} -> {}  {}  Rs {:.0}  [{}]",
            style(&route.id[..8.min(route.id.len())]).dim(),
            route.origin,
            route.destination,
            route.estimated_duration,
            route.fare,
            route.operator
        );
        println!("          {}", style(&route.route_name).dim());
    }
}
