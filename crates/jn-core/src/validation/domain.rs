//! Domain validation: business rules on normalized input.
//! 领域校验：针对规范化输入的业务规则。
//!
//! Unlike transport validation, every rule is evaluated and all violations
//! are reported together in one `DomainValidationError`.

use chrono::NaiveDate;

use crate::entry::{parse_calendar_date, EntryDraft, NormalizedEntryInput};
use crate::ids::EntryId;
use crate::query::limits::per_page_in_bounds;
use crate::query::{NormalizedListInput, SortDirection, SortField};
use crate::validation::codes::DomainErrorCode;
use crate::validation::error::DomainValidationError;

/// Typed values read while validating a list query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CheckedListFields {
    pub sort_field: SortField,
    pub sort_dir: SortDirection,
    pub date: Option<NaiveDate>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

pub struct DomainValidator;

impl DomainValidator {
    pub fn assert_list_input(input: &NormalizedListInput) -> Result<(), DomainValidationError> {
        Self::check_list_input(input).map(|_| ())
    }

    pub(crate) fn check_list_input(
        input: &NormalizedListInput,
    ) -> Result<CheckedListFields, DomainValidationError> {
        let mut codes = Vec::new();

        if input.page < 1 {
            codes.push(DomainErrorCode::PageOutOfRange);
        }
        if !per_page_in_bounds(input.per_page) {
            codes.push(DomainErrorCode::PerPageOutOfRange);
        }

        let sort_field = SortField::parse(&input.sort_field);
        if sort_field.is_none() {
            codes.push(DomainErrorCode::SortFieldInvalid);
        }
        let sort_dir = SortDirection::parse(&input.sort_dir);
        if sort_dir.is_none() {
            codes.push(DomainErrorCode::SortDirInvalid);
        }

        let date = Self::optional_date(&input.date, DomainErrorCode::DateInvalid, &mut codes);
        let date_from =
            Self::optional_date(&input.date_from, DomainErrorCode::DateFromInvalid, &mut codes);
        let date_to = Self::optional_date(&input.date_to, DomainErrorCode::DateToInvalid, &mut codes);

        if let (Some(Some(from)), Some(Some(to))) = (date_from, date_to) {
            if from > to {
                codes.push(DomainErrorCode::DateRangeInvalid);
            }
        }

        Self::reject(&codes)?;

        Ok(CheckedListFields {
            sort_field: sort_field.unwrap_or_default(),
            sort_dir: sort_dir.unwrap_or_default(),
            date: date.flatten(),
            date_from: date_from.flatten(),
            date_to: date_to.flatten(),
        })
    }

    /// Entry id from a single-entity request; must be a UUID.
    pub fn check_entry_id(id: &str) -> Result<EntryId, DomainValidationError> {
        let id = EntryId::from(id.trim());
        if !id.is_uuid() {
            Self::reject(&[DomainErrorCode::IdInvalid])?;
        }
        Ok(id)
    }

    pub fn assert_entry_input(input: &NormalizedEntryInput) -> Result<(), DomainValidationError> {
        Self::check_entry_input(input).map(|_| ())
    }

    /// Add-entry rules: non-empty title and body, canonical date.
    pub fn check_entry_input(input: &NormalizedEntryInput) -> Result<EntryDraft, DomainValidationError> {
        let mut codes = Vec::new();

        if input.title.is_empty() {
            codes.push(DomainErrorCode::TitleEmpty);
        }
        if input.body.is_empty() {
            codes.push(DomainErrorCode::BodyEmpty);
        }
        let Some(date) = parse_calendar_date(&input.date) else {
            codes.push(DomainErrorCode::DateInvalid);
            return Err(Self::rejection(codes));
        };
        Self::reject(&codes)?;

        Ok(EntryDraft {
            date,
            title: input.title.clone(),
            body: input.body.clone(),
        })
    }

    /// `None` when the filter is absent, `Some(None)` when present but invalid.
    fn optional_date(
        value: &Option<String>,
        invalid: DomainErrorCode,
        codes: &mut Vec<DomainErrorCode>,
    ) -> Option<Option<NaiveDate>> {
        let raw = value.as_deref()?;
        let parsed = parse_calendar_date(raw);
        if parsed.is_none() {
            codes.push(invalid);
        }
        Some(parsed)
    }

    fn reject(codes: &[DomainErrorCode]) -> Result<(), DomainValidationError> {
        if codes.is_empty() {
            return Ok(());
        }
        Err(Self::rejection(codes.to_vec()))
    }

    fn rejection(codes: Vec<DomainErrorCode>) -> DomainValidationError {
        #[cfg(feature = "tracing")]
        tracing::debug!(codes = ?codes, "domain validation rejected input");
        DomainValidationError::from_codes(codes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_codes(input: NormalizedListInput) -> Vec<DomainErrorCode> {
        match DomainValidator::assert_list_input(&input) {
            Ok(()) => vec![],
            Err(err) => err.codes().to_vec(),
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(list_codes(NormalizedListInput::default()).is_empty());
    }

    #[test]
    fn test_every_sortable_field_is_accepted() {
        for field in SortField::ALL {
            let input = NormalizedListInput {
                sort_field: field.as_str().to_string(),
                ..Default::default()
            };
            assert!(list_codes(input).is_empty(), "{field} should be sortable");
        }
    }

    #[test]
    fn test_unknown_sort_field_is_invalid() {
        for field in ["body", "id", "DATE", "created_at", "title; DROP TABLE entries"] {
            let input = NormalizedListInput {
                sort_field: field.to_string(),
                ..Default::default()
            };
            assert_eq!(list_codes(input), vec![DomainErrorCode::SortFieldInvalid]);
        }
    }

    #[test]
    fn test_sort_dir_is_rechecked() {
        let input = NormalizedListInput {
            sort_dir: "asc".into(),
            ..Default::default()
        };
        assert_eq!(list_codes(input), vec![DomainErrorCode::SortDirInvalid]);
    }

    #[test]
    fn test_invalid_dates_report_their_own_codes() {
        let input = NormalizedListInput {
            date: Some("2025-13-01".into()),
            date_from: Some("yesterday".into()),
            date_to: Some("2025/06/10".into()),
            ..Default::default()
        };
        assert_eq!(
            list_codes(input),
            vec![
                DomainErrorCode::DateInvalid,
                DomainErrorCode::DateFromInvalid,
                DomainErrorCode::DateToInvalid,
            ]
        );
    }

    #[test]
    fn test_reversed_range_is_invalid() {
        let input = NormalizedListInput {
            date_from: Some("2025-06-10".into()),
            date_to: Some("2025-06-01".into()),
            ..Default::default()
        };
        assert_eq!(list_codes(input), vec![DomainErrorCode::DateRangeInvalid]);
    }

    #[test]
    fn test_single_day_range_is_valid() {
        let input = NormalizedListInput {
            date_from: Some("2025-06-10".into()),
            date_to: Some("2025-06-10".into()),
            ..Default::default()
        };
        assert!(list_codes(input).is_empty());
    }

    #[test]
    fn test_range_not_checked_when_a_bound_is_invalid() {
        let input = NormalizedListInput {
            date_from: Some("2025-06-10".into()),
            date_to: Some("junk".into()),
            ..Default::default()
        };
        assert_eq!(list_codes(input), vec![DomainErrorCode::DateToInvalid]);
    }

    #[test]
    fn test_violations_accumulate() {
        let input = NormalizedListInput {
            page: 0,
            per_page: 500,
            sort_field: "mood".into(),
            date_from: Some("2025-06-10".into()),
            date_to: Some("2025-06-01".into()),
            ..Default::default()
        };
        assert_eq!(
            list_codes(input),
            vec![
                DomainErrorCode::PageOutOfRange,
                DomainErrorCode::PerPageOutOfRange,
                DomainErrorCode::SortFieldInvalid,
                DomainErrorCode::DateRangeInvalid,
            ]
        );
    }

    #[test]
    fn test_check_entry_id() {
        let ok = DomainValidator::check_entry_id(" 6f1c2d3e-4b5a-4c6d-8e7f-0123456789ab ").unwrap();
        assert_eq!(ok.as_str(), "6f1c2d3e-4b5a-4c6d-8e7f-0123456789ab");

        let err = DomainValidator::check_entry_id("42").unwrap_err();
        assert_eq!(err.codes(), &[DomainErrorCode::IdInvalid]);
    }

    #[test]
    fn test_entry_input_accumulates_violations() {
        let input = NormalizedEntryInput {
            date: "June 5th".into(),
            title: String::new(),
            body: String::new(),
        };
        let err = DomainValidator::assert_entry_input(&input).unwrap_err();
        assert_eq!(
            err.codes(),
            &[
                DomainErrorCode::TitleEmpty,
                DomainErrorCode::BodyEmpty,
                DomainErrorCode::DateInvalid,
            ]
        );
    }

    #[test]
    fn test_entry_input_with_only_bad_date() {
        let input = NormalizedEntryInput {
            date: "2025-02-30".into(),
            title: "Walk".into(),
            body: "River path".into(),
        };
        let err = DomainValidator::check_entry_input(&input).unwrap_err();
        assert_eq!(err.codes(), &[DomainErrorCode::DateInvalid]);
    }

    #[test]
    fn test_entry_input_yields_draft() {
        let input = NormalizedEntryInput {
            date: "2025-06-05".into(),
            title: "Walk".into(),
            body: "River path".into(),
        };
        let draft = DomainValidator::check_entry_input(&input).unwrap();
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2025, 6, 5).unwrap());
        assert_eq!(draft.title, "Walk");
    }
}
