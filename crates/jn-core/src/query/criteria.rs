//! List-entries criteria: the immutable query handed to storage.
//! 列表查询条件：交给存储层的不可变查询规格。

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::entry::Entry;
use crate::query::normalizer::NormalizedListInput;
use crate::query::sort::{SortDirection, SortField};
use crate::validation::{DomainValidationError, DomainValidator};

/// Fully-resolved filters, sort and pagination for one list request.
///
/// ## Semantics / 语义
///
/// - `date` and `date_from`/`date_to` are independent filters combined with AND.
/// - The range is inclusive on both ends; either bound may be open.
/// - `query` is a case-insensitive substring match on title OR body.
/// - Rows are ordered by `sort_field`/`sort_dir`, ties broken by id ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntriesCriteria {
    page: u64,
    per_page: u32,
    sort_field: SortField,
    sort_dir: SortDirection,
    date: Option<NaiveDate>,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
    query: Option<String>,
}

impl ListEntriesCriteria {
    /// Unfiltered criteria. Bounds are the caller's responsibility; the
    /// builder is the checked path.
    pub fn new(page: u64, per_page: u32, sort_field: SortField, sort_dir: SortDirection) -> Self {
        Self {
            page,
            per_page,
            sort_field,
            sort_dir,
            date: None,
            date_from: None,
            date_to: None,
            query: None,
        }
    }

    pub fn with_date(self, date: Option<NaiveDate>) -> Self {
        Self { date, ..self }
    }

    pub fn with_date_range(self, date_from: Option<NaiveDate>, date_to: Option<NaiveDate>) -> Self {
        Self {
            date_from,
            date_to,
            ..self
        }
    }

    pub fn with_query(self, query: Option<String>) -> Self {
        Self { query, ..self }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn sort_field(&self) -> SortField {
        self.sort_field
    }

    pub fn sort_dir(&self) -> SortDirection {
        self.sort_dir
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn date_from(&self) -> Option<NaiveDate> {
        self.date_from
    }

    pub fn date_to(&self) -> Option<NaiveDate> {
        self.date_to
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Zero-based row offset of the requested page.
    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(u64::from(self.per_page))
    }

    /// Whether `entry` satisfies every filter.
    pub fn matches(&self, entry: &Entry) -> bool {
        if self.date.is_some_and(|date| entry.date != date) {
            return false;
        }
        if self.date_from.is_some_and(|from| entry.date < from) {
            return false;
        }
        if self.date_to.is_some_and(|to| entry.date > to) {
            return false;
        }
        match &self.query {
            Some(query) => {
                let needle = query.to_lowercase();
                entry.title.to_lowercase().contains(&needle)
                    || entry.body.to_lowercase().contains(&needle)
            }
            None => true,
        }
    }

    /// Result ordering: the requested sort, then id ascending.
    pub fn compare(&self, a: &Entry, b: &Entry) -> Ordering {
        let primary = match self.sort_field {
            SortField::Date => a.date.cmp(&b.date),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            SortField::Title => a.title.cmp(&b.title),
        };
        let primary = match self.sort_dir {
            SortDirection::Asc => primary,
            SortDirection::Desc => primary.reverse(),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

pub struct CriteriaBuilder;

impl CriteriaBuilder {
    /// Copy normalized, validated input into criteria.
    ///
    /// Meant to run after `DomainValidator::assert_list_input`. It reads the
    /// typed values through the same checks, so input that skipped validation
    /// is rejected with the same codes instead of producing criteria.
    pub fn build(input: &NormalizedListInput) -> Result<ListEntriesCriteria, DomainValidationError> {
        let checked = DomainValidator::check_list_input(input)?;

        Ok(
            ListEntriesCriteria::new(input.page, input.per_page, checked.sort_field, checked.sort_dir)
                .with_date(checked.date)
                .with_date_range(checked.date_from, checked.date_to)
                .with_query(input.query.clone()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::EntryId;
    use crate::validation::DomainErrorCode;
    use chrono::{TimeZone, Utc};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(id: &str, date: NaiveDate, title: &str, body: &str) -> Entry {
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        Entry::restore(EntryId::from(id), date, title.into(), body.into(), at, at)
    }

    #[test]
    fn test_build_reproduces_normalized_values() {
        let input = NormalizedListInput {
            page: 3,
            per_page: 25,
            sort_field: "title".into(),
            sort_dir: "ASC".into(),
            date: Some("2025-06-05".into()),
            date_from: Some("2025-06-01".into()),
            date_to: Some("2025-06-10".into()),
            query: Some("Coffee".into()),
        };

        let criteria = CriteriaBuilder::build(&input).unwrap();

        assert_eq!(criteria.page(), 3);
        assert_eq!(criteria.per_page(), 25);
        assert_eq!(criteria.sort_field(), SortField::Title);
        assert_eq!(criteria.sort_dir(), SortDirection::Asc);
        assert_eq!(criteria.date(), Some(ymd(2025, 6, 5)));
        assert_eq!(criteria.date_from(), Some(ymd(2025, 6, 1)));
        assert_eq!(criteria.date_to(), Some(ymd(2025, 6, 10)));
        assert_eq!(criteria.query(), Some("Coffee"));
    }

    #[test]
    fn test_build_rejects_unvalidated_input() {
        let input = NormalizedListInput {
            sort_field: "body".into(),
            ..NormalizedListInput::default()
        };
        let err = CriteriaBuilder::build(&input).unwrap_err();
        assert_eq!(err.codes(), &[DomainErrorCode::SortFieldInvalid]);
    }

    #[test]
    fn test_offset_is_zero_based() {
        let criteria = ListEntriesCriteria::new(1, 10, SortField::Date, SortDirection::Desc);
        assert_eq!(criteria.offset(), 0);
        let criteria = ListEntriesCriteria::new(3, 10, SortField::Date, SortDirection::Desc);
        assert_eq!(criteria.offset(), 20);
        let criteria = ListEntriesCriteria::new(u64::MAX, 100, SortField::Date, SortDirection::Desc);
        assert_eq!(criteria.offset(), u64::MAX);
    }

    #[test]
    fn test_exact_date_and_range_combine_with_and() {
        let criteria = ListEntriesCriteria::new(1, 10, SortField::Date, SortDirection::Desc)
            .with_date(Some(ymd(2025, 6, 5)))
            .with_date_range(Some(ymd(2025, 6, 1)), Some(ymd(2025, 6, 10)));

        assert!(criteria.matches(&entry("a", ymd(2025, 6, 5), "t", "b")));
        assert!(!criteria.matches(&entry("b", ymd(2025, 6, 6), "t", "b")));

        let disjoint = criteria.with_date_range(Some(ymd(2025, 7, 1)), None);
        assert!(!disjoint.matches(&entry("a", ymd(2025, 6, 5), "t", "b")));
    }

    #[test]
    fn test_range_is_inclusive() {
        let criteria = ListEntriesCriteria::new(1, 10, SortField::Date, SortDirection::Desc)
            .with_date_range(Some(ymd(2025, 6, 1)), Some(ymd(2025, 6, 10)));

        assert!(criteria.matches(&entry("a", ymd(2025, 6, 1), "t", "b")));
        assert!(criteria.matches(&entry("b", ymd(2025, 6, 10), "t", "b")));
        assert!(!criteria.matches(&entry("c", ymd(2025, 5, 31), "t", "b")));
        assert!(!criteria.matches(&entry("d", ymd(2025, 6, 11), "t", "b")));
    }

    #[test]
    fn test_query_matches_title_or_body_case_insensitively() {
        let criteria = ListEntriesCriteria::new(1, 10, SortField::Date, SortDirection::Desc)
            .with_query(Some("cOfFeE".into()));

        assert!(criteria.matches(&entry("a", ymd(2025, 6, 1), "Coffee run", "")));
        assert!(criteria.matches(&entry("b", ymd(2025, 6, 1), "Morning", "more COFFEE")));
        assert!(!criteria.matches(&entry("c", ymd(2025, 6, 1), "Tea", "green")));
    }

    #[test]
    fn test_compare_breaks_ties_by_id() {
        let criteria = ListEntriesCriteria::new(1, 10, SortField::Date, SortDirection::Desc);
        let a = entry("a", ymd(2025, 6, 5), "x", "");
        let b = entry("b", ymd(2025, 6, 5), "y", "");
        let newer = entry("0", ymd(2025, 6, 6), "z", "");

        let mut rows = vec![b.clone(), newer.clone(), a.clone()];
        rows.sort_by(|x, y| criteria.compare(x, y));

        assert_eq!(rows, vec![newer, a, b]);
    }
}
