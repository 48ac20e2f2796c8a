//! ID type wrappers for type safety.

mod id_macro;

use serde::{Deserialize, Serialize};

use id_macro::impl_id;

/// Identifier of a journal entry (UUID v4, assigned once at creation).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntryId(String);

impl_id!(EntryId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_id_is_uuid() {
        let id = EntryId::new();
        assert!(id.is_uuid());
    }

    #[test]
    fn test_entry_id_from_str() {
        let id: EntryId = "not-a-uuid".into();
        assert_eq!(id.as_str(), "not-a-uuid");
        assert!(!id.is_uuid());
    }

    #[test]
    fn test_entry_ids_order_lexically() {
        let a = EntryId::from("00000000-0000-4000-8000-000000000001");
        let b = EntryId::from("00000000-0000-4000-8000-000000000002");
        assert!(a < b);
    }
}
