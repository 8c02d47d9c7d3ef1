use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwitchError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Cannot find vehicle data: {path}")]
    VehicleDataMissing { path: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

impl SwitchError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SwitchError::IoError(_) => "Check filesystem permissions and available disk space",
            SwitchError::VehicleDataMissing { .. } => {
                "Check that the vehicle data directory exists and is readable"
            }
            SwitchError::ConfigValidationError { .. }
            | SwitchError::InvalidConfigValueError { .. }
            | SwitchError::MissingConfigError { .. } => {
                "Fix the layout file or CLI flags and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SwitchError>;
