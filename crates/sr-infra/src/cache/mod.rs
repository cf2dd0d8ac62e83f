mod reveal_payload_cache;

pub use reveal_payload_cache::InMemoryRevealCache;
