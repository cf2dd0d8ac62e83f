//! ID type wrappers for type safety.

mod id_macro;
pub mod target_id;

pub use target_id::TargetId;
