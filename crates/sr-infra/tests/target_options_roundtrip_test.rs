//! Options persistence through the public repository API.

use chrono::{TimeZone, Utc};
use diesel::prelude::*;
use sr_core::options::{Easing, OptionOverrides, Origin, RotateOverride};
use sr_core::ports::TargetRepositoryPort;
use sr_core::{TargetDraft, TargetId};
use sr_infra::db::mappers::TargetRowMapper;
use sr_infra::db::pool::init_db_pool;
use sr_infra::db::repositories::DieselTargetRepository;
use sr_infra::db::schema::reveal_target;
use sr_infra::db::DieselSqliteExecutor;
use tempfile::TempDir;

fn full_overrides() -> OptionOverrides {
    OptionOverrides {
        distance: Some(20.0),
        delay: Some(300),
        duration: Some(900),
        interval: Some(50),
        opacity: Some(0.25),
        easing: Some(Easing::EaseInOut),
        origin: Some(Origin::Left),
        scale: Some(0.8),
        rotate: RotateOverride {
            x: Some(0),
            y: Some(45),
            z: None,
        },
    }
}

#[tokio::test]
async fn saved_options_reload_unchanged() {
    let dir = TempDir::new().unwrap();
    let pool = init_db_pool(dir.path().join("rt.db").to_str().unwrap()).unwrap();
    let repo = DieselTargetRepository::new(DieselSqliteExecutor::new(pool), TargetRowMapper);

    let id = repo
        .upsert(TargetDraft {
            id: TargetId::NEW,
            selector: ".hero".into(),
            label: "Hero".into(),
            comment: "landing".into(),
            enabled: true,
            changed_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            options: full_overrides(),
        })
        .await
        .unwrap();

    let record = repo.get_by_id(id).await.unwrap().expect("row exists");
    assert_eq!(record.options, full_overrides());
    assert_eq!(record.comment, "landing");
}

#[tokio::test]
async fn legacy_blob_in_table_reads_as_defaults() {
    let dir = TempDir::new().unwrap();
    let pool = init_db_pool(dir.path().join("legacy.db").to_str().unwrap()).unwrap();

    {
        let mut conn = pool.get().unwrap();
        diesel::insert_into(reveal_target::table)
            .values((
                reveal_target::selector.eq(".legacy"),
                reveal_target::label.eq("Legacy"),
                reveal_target::comment.eq(""),
                reveal_target::enabled.eq(true),
                reveal_target::changed_at.eq(1_600_000_000_i64),
                reveal_target::options
                    .eq(br#"a:2:{s:8:"distance";s:2:"20";s:7:"opacity";s:3:"0.5";}"#.to_vec()),
            ))
            .execute(&mut conn)
            .unwrap();
    }

    let repo = DieselTargetRepository::new(DieselSqliteExecutor::new(pool), TargetRowMapper);
    let enabled = repo.list_enabled().await.unwrap();
    assert_eq!(enabled.len(), 1);
    assert!(enabled[0].options.is_empty());
}
