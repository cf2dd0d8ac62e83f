//! Versioned storage envelope for per-target option overrides.
//!
//! The persisted form is `{"version":1,"options":{...}}`. Both levels reject
//! unknown keys and every enum is closed, so a blob can only ever decode into
//! plain values.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::model::OptionOverrides;

pub const OPTIONS_BLOB_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum OptionsBlobError {
    #[error("options blob is not valid UTF-8")]
    NotUtf8,

    #[error("unsupported options blob version: {0}")]
    UnsupportedVersion(u32),

    #[error("options blob rejected: {0}")]
    Rejected(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    options: &'a OptionOverrides,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Envelope {
    version: u32,
    options: serde_json::Value,
}

pub fn encode(options: &OptionOverrides) -> Result<Vec<u8>, OptionsBlobError> {
    let envelope = EnvelopeRef {
        version: OPTIONS_BLOB_VERSION,
        options,
    };
    Ok(serde_json::to_vec(&envelope)?)
}

pub fn decode(bytes: &[u8]) -> Result<OptionOverrides, OptionsBlobError> {
    let text = std::str::from_utf8(bytes).map_err(|_| OptionsBlobError::NotUtf8)?;
    let envelope: Envelope = serde_json::from_str(text)?;
    if envelope.version != OPTIONS_BLOB_VERSION {
        return Err(OptionsBlobError::UnsupportedVersion(envelope.version));
    }
    Ok(serde_json::from_value(envelope.options)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{Easing, RotateOverride};

    #[test]
    fn encoded_blob_decodes_to_same_overrides() {
        let overrides = OptionOverrides {
            distance: Some(20.0),
            delay: Some(300),
            easing: Some(Easing::EaseOut),
            rotate: RotateOverride {
                x: Some(10),
                ..Default::default()
            },
            ..Default::default()
        };

        let bytes = encode(&overrides).unwrap();
        assert_eq!(decode(&bytes).unwrap(), overrides);
    }

    #[test]
    fn empty_overrides_encode_to_empty_object() {
        let bytes = encode(&OptionOverrides::default()).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"version":1,"options":{}}"#
        );
    }

    #[test]
    fn rejects_php_serialized_payload() {
        let legacy = br#"a:1:{s:8:"distance";s:4:"20px";}"#;
        assert!(matches!(decode(legacy), Err(OptionsBlobError::Rejected(_))));
    }

    #[test]
    fn rejects_object_payload_with_class_marker() {
        let legacy = br#"O:8:"stdClass":0:{}"#;
        assert!(decode(legacy).is_err());
    }

    #[test]
    fn rejects_unknown_keys() {
        let blob = br#"{"version":1,"options":{"onReveal":"alert(1)"}}"#;
        assert!(matches!(decode(blob), Err(OptionsBlobError::Rejected(_))));

        let blob = br#"{"version":1,"options":{},"extra":true}"#;
        assert!(decode(blob).is_err());
    }

    #[test]
    fn rejects_unknown_enum_value() {
        let blob = br#"{"version":1,"options":{"easing":"bounce"}}"#;
        assert!(decode(blob).is_err());
    }

    #[test]
    fn rejects_other_versions() {
        let blob = br#"{"version":2,"options":{}}"#;
        assert!(matches!(
            decode(blob),
            Err(OptionsBlobError::UnsupportedVersion(2))
        ));
    }

    #[test]
    fn rejects_non_utf8() {
        assert!(matches!(
            decode(&[0xff, 0xfe, 0x00]),
            Err(OptionsBlobError::NotUtf8)
        ));
    }
}
