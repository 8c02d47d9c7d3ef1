pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{toml_config::TomlConfig, CliConfig};
pub use crate::core::manager::VehicleManager;
pub use domain::model::{CopyKind, CopyStep};
pub use utils::error::{Result, SwitchError};
