mod entry_mapper;

pub use entry_mapper::EntryRowMapper;
