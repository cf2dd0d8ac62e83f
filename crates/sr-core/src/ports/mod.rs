//! Port interfaces for the application layer.
//!
//! Ports define the contract between the use cases and the infrastructure
//! implementations, keeping the domain independent of storage, key stores
//! and the browser runtime.

mod cache;
mod clock;
pub mod document;
pub mod errors;
mod library_probe;
pub mod secret_store;
pub mod settings;
pub mod target_repository;

pub use cache::{DerivedCachePort, RevealPayloadCachePort};
pub use clock::*;
pub use document::{DocumentPort, NodeId, RevealLibraryPort};
pub use errors::{SecretStoreError, TargetRepositoryError};
pub use library_probe::LibraryProbePort;
pub use secret_store::SecretStorePort;
pub use settings::{SettingsMigrationPort, SettingsPort};
pub use target_repository::TargetRepositoryPort;
