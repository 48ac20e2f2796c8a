//! List-entries query pipeline.
//! 条目列表查询流水线。
//!
//! raw payload → [`InputNormalizer`] → validators → [`CriteriaBuilder`] →
//! [`ListEntriesCriteria`] → storage → [`EntryPage`]

mod criteria;
pub mod limits;
mod normalizer;
mod page;
mod sort;

pub use criteria::{CriteriaBuilder, ListEntriesCriteria};
pub use normalizer::{InputNormalizer, NormalizedListInput};
pub use page::{pages_count, EntryPage};
pub use sort::{SortDirection, SortField};
