//! Transport validation: type and presence checks on raw payloads.
//! 传输层校验：只检查原始负载的类型与存在性。
//!
//! Checks never look at content ("is this a date?"), only at shape ("is this
//! a string?"). Fields are checked in a fixed order and the first violation
//! is reported; nothing is accumulated.

use serde_json::Value;

use crate::input::{field, keys};
use crate::validation::codes::TransportErrorCode;
use crate::validation::error::TransportValidationError;

type TransportResult = Result<(), TransportValidationError>;

pub struct TransportValidator;

impl TransportValidator {
    /// List-query payload. Every key is optional; present keys must have the
    /// right type. Order: page, perPage, sortField, sortDir, date, dateFrom,
    /// dateTo, query.
    pub fn assert_list_input(raw: &Value) -> TransportResult {
        Self::require_object(raw)?;
        Self::optional_scalar(raw, keys::PAGE, TransportErrorCode::PageNotScalar)?;
        Self::optional_scalar(raw, keys::PER_PAGE, TransportErrorCode::PerPageNotScalar)?;
        Self::optional_string(raw, keys::SORT_FIELD, TransportErrorCode::SortFieldNotString)?;
        Self::optional_string(raw, keys::SORT_DIR, TransportErrorCode::SortDirNotString)?;
        Self::optional_string(raw, keys::DATE, TransportErrorCode::DateNotString)?;
        Self::optional_string(raw, keys::DATE_FROM, TransportErrorCode::DateFromNotString)?;
        Self::optional_string(raw, keys::DATE_TO, TransportErrorCode::DateToNotString)?;
        Self::optional_string(raw, keys::QUERY, TransportErrorCode::QueryNotString)
    }

    /// Single-entity payload (get/delete): `id` must be present and a string.
    pub fn assert_id_input(raw: &Value) -> TransportResult {
        Self::require_object(raw)?;
        Self::required_string(
            raw,
            keys::ID,
            TransportErrorCode::IdRequired,
            TransportErrorCode::IdNotString,
        )
    }

    /// Add-entry payload. Order: title, body, date.
    pub fn assert_new_entry_input(raw: &Value) -> TransportResult {
        Self::require_object(raw)?;
        Self::required_string(
            raw,
            keys::TITLE,
            TransportErrorCode::TitleRequired,
            TransportErrorCode::TitleNotString,
        )?;
        Self::required_string(
            raw,
            keys::BODY,
            TransportErrorCode::BodyRequired,
            TransportErrorCode::BodyNotString,
        )?;
        Self::required_string(
            raw,
            keys::DATE,
            TransportErrorCode::DateRequired,
            TransportErrorCode::DateNotString,
        )
    }

    fn require_object(raw: &Value) -> TransportResult {
        if raw.is_object() {
            Ok(())
        } else {
            Err(TransportErrorCode::PayloadNotObject.into())
        }
    }

    fn required_string(
        raw: &Value,
        key: &str,
        missing: TransportErrorCode,
        wrong_type: TransportErrorCode,
    ) -> TransportResult {
        match field(raw, key) {
            None => Err(missing.into()),
            Some(Value::String(_)) => Ok(()),
            Some(_) => Err(wrong_type.into()),
        }
    }

    fn optional_string(raw: &Value, key: &str, wrong_type: TransportErrorCode) -> TransportResult {
        match field(raw, key) {
            None | Some(Value::String(_)) => Ok(()),
            Some(_) => Err(wrong_type.into()),
        }
    }

    fn optional_scalar(raw: &Value, key: &str, wrong_type: TransportErrorCode) -> TransportResult {
        match field(raw, key) {
            None | Some(Value::String(_)) | Some(Value::Number(_)) => Ok(()),
            Some(_) => Err(wrong_type.into()),
        }
    }
}
