//! Calculator core: tokens, arithmetic, number formatting and the engine
//!
//! The engine itself never fails. Errors only appear where free-form text
//! is turned into tokens.

pub mod engine;
pub mod format;
mod operations;
pub mod token;

pub use engine::{DecimalPolicy, Engine, EngineConfig, EngineState};
pub use format::format_number;
pub use operations::{evaluate, parse_number};
pub use token::{Digit, Operator, Token};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// A label that does not name any calculator button
    #[error("Unknown token: {0:?}")]
    UnknownToken(String),
    /// A digit value outside 0-9
    #[error("Invalid digit: {0}")]
    InvalidDigit(u8),
    /// Engine state that cannot be restored
    #[error("Invalid state: {0}")]
    InvalidState(String),
}
