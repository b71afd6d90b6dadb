use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoanSimError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Non-numeric value for {field}: '{raw}'")]
    NonNumeric { field: String, raw: String },

    #[error("Missing form field: {0}")]
    MissingField(String),

    #[error("Unknown collateral type: {0}")]
    UnknownCollateral(String),

    #[error("Help request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
