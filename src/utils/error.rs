use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error(
        "Invalid Ensembl identifier: '{id}' (expected 'ENS', an optional species prefix, 'G' and 11 digits, e.g. ENSRNOG00000016516)"
    )]
    InvalidGeneIdError { id: String },

    #[error("Output file already exists: {path}. Use --overwrite to overwrite it.")]
    OutputExistsError { path: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

pub type Result<T> = std::result::Result<T, EtlError>;
