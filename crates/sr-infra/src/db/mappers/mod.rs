pub mod target_mapper;

pub use target_mapper::TargetRowMapper;
