use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing required configuration field: {field}")]
    MissingConfig { field: String },

    #[error("Invalid value for {field}: '{value}'. {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("'{value}' is not a number (field: {field})")]
    InvalidAmount { field: String, value: String },

    #[error("No alert capability was registered before mounting")]
    AlertCapabilityMissing,

    #[error("Mount target '#{selector}' not found in the host surface")]
    MountTargetNotFound { selector: String },

    #[error("Mount target '#{selector}' already has a mounted view")]
    MountTargetOccupied { selector: String },
}

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Validation,
    Mount,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::MissingConfig { .. }
            | AppError::InvalidConfigValue { .. }
            | AppError::ConfigFile(_) => ErrorCategory::Configuration,
            AppError::InvalidAmount { .. } => ErrorCategory::Validation,
            AppError::AlertCapabilityMissing
            | AppError::MountTargetNotFound { .. }
            | AppError::MountTargetOccupied { .. } => ErrorCategory::Mount,
            AppError::Io(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::InvalidAmount { .. } => ErrorSeverity::Medium,
            AppError::Io(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AppError::MissingConfig { field } => {
                format!("Provide the '{}' option on the command line or in the config file", field)
            }
            AppError::InvalidConfigValue { field, .. } => {
                format!("Check the value given for '{}'", field)
            }
            AppError::ConfigFile(_) => {
                "Check the TOML syntax of the configuration file".to_string()
            }
            AppError::Io(_) => "Check that the configuration file exists and is readable".to_string(),
            AppError::InvalidAmount { .. } => {
                "Amounts must be plain decimal numbers, e.g. 1000 or 49.90".to_string()
            }
            AppError::AlertCapabilityMissing => {
                "Register an alerter with use_alerter() before mounting".to_string()
            }
            AppError::MountTargetNotFound { selector } => {
                format!("Add a '#{}' node to the host surface before bootstrapping", selector)
            }
            AppError::MountTargetOccupied { .. } => {
                "Mount each app instance to its own node".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::MissingConfig { field } => format!("A required setting is missing: {}", field),
            AppError::InvalidConfigValue { field, value, .. } => {
                format!("The setting '{}' has an invalid value: '{}'", field, value)
            }
            AppError::ConfigFile(_) => "The configuration file could not be parsed".to_string(),
            AppError::Io(e) => format!("A file operation failed: {}", e),
            AppError::InvalidAmount { value, .. } => {
                format!("'{}' could not be read as an amount", value)
            }
            AppError::AlertCapabilityMissing => {
                "The app was built without an alert capability".to_string()
            }
            AppError::MountTargetNotFound { selector } => {
                format!("The app could not be mounted: no '#{}' node exists", selector)
            }
            AppError::MountTargetOccupied { selector } => {
                format!("The app could not be mounted: '#{}' is already in use", selector)
            }
        }
    }
}
