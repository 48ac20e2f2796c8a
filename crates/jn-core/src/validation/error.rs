use thiserror::Error;

use crate::validation::codes::{DomainErrorCode, TransportErrorCode};

/// First structural violation found in a raw payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transport validation failed: {code}")]
pub struct TransportValidationError {
    code: TransportErrorCode,
}

impl TransportValidationError {
    pub fn new(code: TransportErrorCode) -> Self {
        Self { code }
    }

    pub fn code(&self) -> TransportErrorCode {
        self.code
    }
}

impl From<TransportErrorCode> for TransportValidationError {
    fn from(code: TransportErrorCode) -> Self {
        Self::new(code)
    }
}

/// Every business-rule violation found in normalized input.
///
/// Never empty: an empty code list means the input is valid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("domain validation failed: {}", join_codes(.codes))]
pub struct DomainValidationError {
    codes: Vec<DomainErrorCode>,
}

impl DomainValidationError {
    /// `Ok(())` when `codes` is empty, otherwise the accumulated failure.
    pub fn check(codes: Vec<DomainErrorCode>) -> Result<(), Self> {
        if codes.is_empty() {
            Ok(())
        } else {
            Err(Self { codes })
        }
    }

    /// Callers guarantee at least one code.
    pub(crate) fn from_codes(codes: Vec<DomainErrorCode>) -> Self {
        debug_assert!(!codes.is_empty());
        Self { codes }
    }

    pub fn single(code: DomainErrorCode) -> Self {
        Self { codes: vec![code] }
    }

    pub fn codes(&self) -> &[DomainErrorCode] {
        &self.codes
    }

    pub fn contains(&self, code: DomainErrorCode) -> bool {
        self.codes.contains(&code)
    }
}

fn join_codes(codes: &[DomainErrorCode]) -> String {
    codes
        .iter()
        .map(DomainErrorCode::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
