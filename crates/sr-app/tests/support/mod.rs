//! Mock ports shared by the use case tests.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use mockall::mock;
use sr_core::options::EffectiveOptions;
use sr_core::ports::*;
use sr_core::reveal::RevealElement;
use sr_core::target::{Target, TargetPage, TargetQuery, TargetRecord};
use sr_core::{Settings, TargetDraft, TargetId};

mock! {
    pub TargetRepo {}

    #[async_trait]
    impl TargetRepositoryPort for TargetRepo {
        async fn exists(&self, selector: &str) -> Result<bool, TargetRepositoryError>;
        async fn upsert(&self, draft: TargetDraft) -> Result<TargetId, TargetRepositoryError>;
        async fn delete(&self, id: TargetId) -> Result<(), TargetRepositoryError>;
        async fn list(&self, query: &TargetQuery) -> Result<TargetPage, TargetRepositoryError>;
        async fn get_by_id(&self, id: TargetId) -> Result<Option<TargetRecord>, TargetRepositoryError>;
        async fn list_enabled(&self) -> Result<Vec<Target>, TargetRepositoryError>;
    }
}

mock! {
    pub SettingsStore {}

    #[async_trait]
    impl SettingsPort for SettingsStore {
        async fn load(&self) -> anyhow::Result<Settings>;
        async fn save(&self, settings: &Settings) -> anyhow::Result<()>;
    }
}

mock! {
    pub Secrets {}

    #[async_trait]
    impl SecretStorePort for Secrets {
        async fn get(&self, name: &str) -> Result<Option<String>, SecretStoreError>;
    }
}

mock! {
    pub DerivedCache {}

    #[async_trait]
    impl DerivedCachePort for DerivedCache {
        async fn flush_derived(&self);
    }
}

mock! {
    pub PayloadCache {}

    #[async_trait]
    impl RevealPayloadCachePort for PayloadCache {
        async fn get(&self) -> Option<Vec<RevealElement>>;
        async fn put(&self, elements: Vec<RevealElement>);
    }
}

mock! {
    pub Probe {}

    impl LibraryProbePort for Probe {
        fn is_installed(&self) -> bool;
    }
}

mock! {
    pub Document {}

    impl DocumentPort for Document {
        fn query_selector_all(&self, selector: &str) -> Vec<NodeId>;
    }
}

mock! {
    pub Library {}

    impl RevealLibraryPort for Library {
        fn set_debug(&self, debug: bool);
        fn reveal(&self, node: NodeId, options: &EffectiveOptions) -> anyhow::Result<()>;
    }
}

/// Clock frozen at 2024-03-07 14:05 UTC.
pub struct FixedClock;

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        Utc.with_ymd_and_hms(2024, 3, 7, 14, 5, 0)
            .unwrap()
            .timestamp_millis()
    }
}

pub fn settings_returning(settings: Settings) -> MockSettingsStore {
    let mut mock = MockSettingsStore::new();
    mock.expect_load().returning(move || Ok(settings.clone()));
    mock
}

pub fn record(selector: &str) -> TargetRecord {
    TargetRecord {
        selector: selector.to_string(),
        label: String::new(),
        comment: String::new(),
        enabled: true,
        options: Default::default(),
    }
}
