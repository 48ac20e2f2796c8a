//! Two-phase input validation.
//! 两阶段输入校验。
//!
//! - [`TransportValidator`]: structural checks on the raw payload, fail-fast.
//! - [`DomainValidator`]: business rules on normalized input, accumulate-all.
//!
//! The two phases have distinct error types so callers can tell a malformed
//! request from a request that breaks a business rule.

mod codes;
mod domain;
mod error;
mod transport;

pub use codes::{DomainErrorCode, TransportErrorCode};
pub use domain::DomainValidator;
pub use error::{DomainValidationError, TransportValidationError};
pub use transport::TransportValidator;
