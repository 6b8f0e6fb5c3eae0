use thiserror::Error;

#[derive(Error, Debug)]
pub enum HolidayError {
    #[error("Unsupported country: {code}")]
    UnsupportedCountry { code: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl HolidayError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            HolidayError::UnsupportedCountry { code } => {
                format!("No holiday calendar is available for country '{}'", code)
            }
            HolidayError::CsvError(e) => format!("Failed to write holiday rows: {}", e),
            HolidayError::IoError(e) => format!("Failed to write the output file: {}", e),
            HolidayError::ConfigError { message } => format!("Invalid configuration: {}", message),
            HolidayError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid value for '{}': {}", field, reason)
            }
            HolidayError::ValidationError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HolidayError::UnsupportedCountry { .. } => {
                "Use one of the supported country codes: US, AU, GB, CA"
            }
            HolidayError::CsvError(_) | HolidayError::IoError(_) => {
                "Check that the output directory exists and is writable"
            }
            HolidayError::ConfigError { .. } => {
                "Make sure the config file exists and is valid TOML"
            }
            HolidayError::InvalidConfigValueError { .. } | HolidayError::ValidationError { .. } => {
                "Fix the highlighted setting and run again"
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            HolidayError::ConfigError { .. }
            | HolidayError::InvalidConfigValueError { .. }
            | HolidayError::ValidationError { .. } => 1,
            HolidayError::UnsupportedCountry { .. } => 2,
            HolidayError::CsvError(_) | HolidayError::IoError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, HolidayError>;
