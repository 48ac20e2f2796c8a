//! Pagination bounds for list queries.

/// First page number; pages are 1-based.
pub const PAGE_DEFAULT: u64 = 1;

pub const PER_PAGE_MIN: u32 = 1;
pub const PER_PAGE_MAX: u32 = 100;
pub const PER_PAGE_DEFAULT: u32 = 10;

/// Whether `per_page` lies within `[PER_PAGE_MIN, PER_PAGE_MAX]`.
pub fn per_page_in_bounds(per_page: u32) -> bool {
    (PER_PAGE_MIN..=PER_PAGE_MAX).contains(&per_page)
}
