//! Machine-readable validation codes.
//! 机器可读的校验错误码。

use serde::{Deserialize, Serialize};

/// Structural violations: wrong type or missing required field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportErrorCode {
    PayloadNotObject,
    IdRequired,
    IdNotString,
    PageNotScalar,
    PerPageNotScalar,
    SortFieldNotString,
    SortDirNotString,
    DateRequired,
    DateNotString,
    DateFromNotString,
    DateToNotString,
    QueryNotString,
    TitleRequired,
    TitleNotString,
    BodyRequired,
    BodyNotString,
}

impl TransportErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PayloadNotObject => "PAYLOAD_NOT_OBJECT",
            Self::IdRequired => "ID_REQUIRED",
            Self::IdNotString => "ID_NOT_STRING",
            Self::PageNotScalar => "PAGE_NOT_SCALAR",
            Self::PerPageNotScalar => "PER_PAGE_NOT_SCALAR",
            Self::SortFieldNotString => "SORT_FIELD_NOT_STRING",
            Self::SortDirNotString => "SORT_DIR_NOT_STRING",
            Self::DateRequired => "DATE_REQUIRED",
            Self::DateNotString => "DATE_NOT_STRING",
            Self::DateFromNotString => "DATE_FROM_NOT_STRING",
            Self::DateToNotString => "DATE_TO_NOT_STRING",
            Self::QueryNotString => "QUERY_NOT_STRING",
            Self::TitleRequired => "TITLE_REQUIRED",
            Self::TitleNotString => "TITLE_NOT_STRING",
            Self::BodyRequired => "BODY_REQUIRED",
            Self::BodyNotString => "BODY_NOT_STRING",
        }
    }
}

impl std::fmt::Display for TransportErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Business-rule violations found after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DomainErrorCode {
    PageOutOfRange,
    PerPageOutOfRange,
    SortFieldInvalid,
    SortDirInvalid,
    DateInvalid,
    DateFromInvalid,
    DateToInvalid,
    DateRangeInvalid,
    IdInvalid,
    TitleEmpty,
    BodyEmpty,
}

impl DomainErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PageOutOfRange => "PAGE_OUT_OF_RANGE",
            Self::PerPageOutOfRange => "PER_PAGE_OUT_OF_RANGE",
            Self::SortFieldInvalid => "SORT_FIELD_INVALID",
            Self::SortDirInvalid => "SORT_DIR_INVALID",
            Self::DateInvalid => "DATE_INVALID",
            Self::DateFromInvalid => "DATE_FROM_INVALID",
            Self::DateToInvalid => "DATE_TO_INVALID",
            Self::DateRangeInvalid => "DATE_RANGE_INVALID",
            Self::IdInvalid => "ID_INVALID",
            Self::TitleEmpty => "TITLE_EMPTY",
            Self::BodyEmpty => "BODY_EMPTY",
        }
    }
}

impl std::fmt::Display for DomainErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_form_matches_display() {
        let json = serde_json::to_string(&TransportErrorCode::PerPageNotScalar).unwrap();
        assert_eq!(json, "\"PER_PAGE_NOT_SCALAR\"");
        assert_eq!(TransportErrorCode::PerPageNotScalar.to_string(), "PER_PAGE_NOT_SCALAR");

        let json = serde_json::to_string(&DomainErrorCode::DateRangeInvalid).unwrap();
        assert_eq!(json, "\"DATE_RANGE_INVALID\"");
        assert_eq!(DomainErrorCode::DateRangeInvalid.to_string(), "DATE_RANGE_INVALID");
    }
}
