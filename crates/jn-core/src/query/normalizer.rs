//! Input normalizer for list queries.
//! 列表查询的输入规范化。
//!
//! Normalization is total: any raw value, including a non-object payload,
//! yields a `NormalizedListInput`. Out-of-range numbers are coerced toward
//! safe defaults, strings are trimmed, and blank filters become `None`.
//! Anything still wrong afterwards is reported by the domain validator.

use serde_json::Value;

use crate::input::{field, integer, keys, trimmed_string};
use crate::query::limits::{PAGE_DEFAULT, PER_PAGE_DEFAULT, PER_PAGE_MAX, PER_PAGE_MIN};
use crate::query::sort::{SortDirection, SortField};

/// List-query input after normalization.
///
/// `sort_field` and `sort_dir` stay textual: only the domain validator decides
/// whether they name a supported field/direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedListInput {
    pub page: u64,
    pub per_page: u32,
    pub sort_field: String,
    pub sort_dir: String,
    pub date: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub query: Option<String>,
}

impl Default for NormalizedListInput {
    fn default() -> Self {
        Self {
            page: PAGE_DEFAULT,
            per_page: PER_PAGE_DEFAULT,
            sort_field: SortField::default().as_str().to_string(),
            sort_dir: SortDirection::default().as_str().to_string(),
            date: None,
            date_from: None,
            date_to: None,
            query: None,
        }
    }
}

pub struct InputNormalizer;

impl InputNormalizer {
    pub fn normalize(raw: &Value) -> NormalizedListInput {
        NormalizedListInput {
            page: Self::page(raw),
            per_page: Self::per_page(raw),
            sort_field: Self::sort_field(raw),
            sort_dir: Self::sort_dir(raw),
            date: trimmed_string(raw, keys::DATE),
            date_from: trimmed_string(raw, keys::DATE_FROM),
            date_to: trimmed_string(raw, keys::DATE_TO),
            query: trimmed_string(raw, keys::QUERY),
        }
    }

    fn page(raw: &Value) -> u64 {
        match integer(raw, keys::PAGE) {
            Some(page) if page >= 1 => page as u64,
            _ => PAGE_DEFAULT,
        }
    }

    fn per_page(raw: &Value) -> u32 {
        match integer(raw, keys::PER_PAGE) {
            Some(per_page) => per_page.clamp(PER_PAGE_MIN as i64, PER_PAGE_MAX as i64) as u32,
            None => PER_PAGE_DEFAULT,
        }
    }

    fn sort_field(raw: &Value) -> String {
        trimmed_string(raw, keys::SORT_FIELD)
            .unwrap_or_else(|| SortField::default().as_str().to_string())
    }

    fn sort_dir(raw: &Value) -> String {
        field(raw, keys::SORT_DIR)
            .and_then(Value::as_str)
            .map(|s| s.trim().to_uppercase())
            .and_then(|s| SortDirection::parse(&s))
            .unwrap_or_default()
            .as_str()
            .to_string()
    }
}
