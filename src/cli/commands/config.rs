//! Config Command
//!
//! Show merged configuration and the file paths it resolves from.

use crate::cli::output::{self, OutputFormat};
use crate::config::ConfigLoader;
use crate::types::{Result, SageError};

/// Show the merged configuration
pub fn show(format: OutputFormat) -> Result<()> {
    let config = ConfigLoader::load()?;
    match format {
        OutputFormat::Json => output::print_json(&config)?,
        OutputFormat::Text => {
            let rendered = toml::to_string_pretty(&config)
                .map_err(|e| SageError::Config(format!("Failed to render config: {}", e)))?;
            print!("{}", rendered);
        }
    }
    Ok(())
}

/// Show configuration file paths and whether they exist
pub fn path() -> Result<()> {
    output::heading("Configuration paths");
    if let Some(global) = ConfigLoader::global_config_path() {
        output::field(
            "global",
            &format!(
                "{}{}",
                global.display(),
                if global.exists() { "" } else { " (absent)" }
            ),
        );
    }
    let project = ConfigLoader::project_config_path();
    output::field(
        "project",
        &format!(
            "{}{}",
            project.display(),
            if project.exists() { "" } else { " (absent)" }
        ),
    );
    Ok(())
}
