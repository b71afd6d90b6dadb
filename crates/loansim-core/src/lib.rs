pub mod catalog;
pub mod currency;
pub mod error;
pub mod form;
pub mod help;
pub mod payment;
pub mod report;
pub mod types;

pub use error::LoanSimError;
pub use types::*;

/// Standard result type for all loan-simulator operations
pub type LoanSimResult<T> = Result<T, LoanSimError>;
