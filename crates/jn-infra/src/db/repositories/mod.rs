mod entry_repo;

pub use entry_repo::*;
