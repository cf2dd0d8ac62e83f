pub mod cache;
pub mod db;
pub mod library;
pub mod secrets;
pub mod settings;
pub mod time;

pub use cache::InMemoryRevealCache;
pub use time::SystemClock;
