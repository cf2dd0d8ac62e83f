use anyhow::{anyhow, Context, Result};
use chrono::{TimeZone, Utc};
use log::warn;
use sr_core::options::{blob, OptionOverrides};
use sr_core::{Target, TargetDraft, TargetId};

use crate::db::models::{NewRevealTargetRow, RevealTargetRow};
use crate::db::ports::{InsertMapper, RowMapper};

pub struct TargetRowMapper;

impl InsertMapper<TargetDraft, NewRevealTargetRow> for TargetRowMapper {
    fn to_row(&self, domain: &TargetDraft) -> Result<NewRevealTargetRow> {
        let options = blob::encode(&domain.options).context("encode target options")?;
        Ok(NewRevealTargetRow {
            selector: domain.selector.clone(),
            label: domain.label.clone(),
            comment: domain.comment.clone(),
            enabled: domain.enabled,
            changed_at: domain.changed_at.timestamp(),
            options,
        })
    }
}

impl RowMapper<RevealTargetRow, Target> for TargetRowMapper {
    fn to_domain(&self, row: &RevealTargetRow) -> Result<Target> {
        Ok(Target {
            id: TargetId::new(row.id),
            selector: row.selector.clone(),
            label: row.label.clone(),
            comment: row.comment.clone(),
            enabled: row.enabled,
            changed_at: timestamp_to_utc(row.changed_at)?,
            options: decode_options(row.id, &row.options),
        })
    }
}

/// A blob that fails to decode is read as "no overrides".
fn decode_options(id: i64, bytes: &[u8]) -> OptionOverrides {
    blob::decode(bytes).unwrap_or_else(|e| {
        warn!("Ignoring options of reveal target {}: {}", id, e);
        OptionOverrides::default()
    })
}

fn timestamp_to_utc(ts: i64) -> Result<chrono::DateTime<Utc>> {
    Utc.timestamp_opt(ts, 0)
        .single()
        .ok_or_else(|| anyhow!("invalid changed_at timestamp: {}", ts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sr_core::Easing;

    fn row(options: &[u8]) -> RevealTargetRow {
        RevealTargetRow {
            id: 7,
            selector: ".hero".to_string(),
            label: "Hero".to_string(),
            comment: String::new(),
            enabled: true,
            changed_at: 1_700_000_000,
            options: options.to_vec(),
        }
    }

    #[test]
    fn maps_row_with_valid_blob() {
        let overrides = OptionOverrides {
            easing: Some(Easing::Linear),
            ..Default::default()
        };
        let bytes = blob::encode(&overrides).unwrap();

        let target = TargetRowMapper.to_domain(&row(&bytes)).unwrap();
        assert_eq!(target.id, TargetId::new(7));
        assert_eq!(target.options, overrides);
        assert_eq!(target.changed_at.timestamp(), 1_700_000_000);
    }

    #[test]
    fn legacy_blob_reads_as_no_overrides() {
        let target = TargetRowMapper
            .to_domain(&row(br#"a:1:{s:7:"opacity";s:3:"0.5";}"#))
            .unwrap();
        assert!(target.options.is_empty());
    }
}
