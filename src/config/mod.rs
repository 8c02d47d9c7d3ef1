pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::Parser;
use toml_config::TomlConfig;

#[derive(Debug, Clone, Parser)]
#[command(name = "vehicle-switch")]
#[command(about = "Switches the driving stack to a specific vehicle's configuration")]
pub struct CliConfig {
    /// Directory holding the vehicle's configuration and calibration files
    pub vehicle_data_path: String,

    /// TOML deployment layout file; the stock layout is used when omitted
    #[arg(long)]
    pub config: Option<String>,

    /// Overrides the root substituted for the <ros> placeholder
    #[arg(long)]
    pub ros_root: Option<String>,

    /// Overrides the base directory for relative target paths
    #[arg(long)]
    pub stack_root: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the deployment layout (file or stock defaults) and applies the
    /// CLI root overrides.
    pub fn layout(&self) -> Result<TomlConfig> {
        let mut layout = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(ros_root) = &self.ros_root {
            layout.deploy.ros_root = ros_root.clone();
        }
        if let Some(stack_root) = &self.stack_root {
            layout.deploy.stack_root = stack_root.clone();
        }

        Ok(layout)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("vehicle_data_path", &self.vehicle_data_path)
    }
}
