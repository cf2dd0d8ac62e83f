use serde::{Deserialize, Serialize};

use crate::options::{AnimationOptions, EffectiveOptions, RevealConfig};
use crate::target::Target;

/// Selector of the sample block rendered by the editor and settings previews.
pub const PREVIEW_SELECTOR: &str = ".scrollreveal__sample";

/// One selector and the options it is revealed with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevealElement {
    pub target: String,
    pub options: EffectiveOptions,
}

/// Payload handed to the client bootstrap script.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientSettings {
    pub debug: bool,
    pub elements: Vec<RevealElement>,
}

/// Where a preview payload takes its option values from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreviewSource {
    /// Target editor: live overrides resolved over stored defaults.
    Editor,
    /// Settings form: live defaults and live config.
    Settings,
}

/// Builds the element list for every enabled target.
pub fn build_elements(
    targets: &[Target],
    defaults: &AnimationOptions,
    config: &RevealConfig,
) -> Vec<RevealElement> {
    targets
        .iter()
        .filter(|target| target.enabled)
        .map(|target| RevealElement {
            target: target.selector.clone(),
            options: EffectiveOptions::build(&target.options.resolve(defaults), config),
        })
        .collect()
}

impl ClientSettings {
    /// Single-element payload for the sample block of a form preview.
    pub fn preview(debug: bool, animation: &AnimationOptions, config: &RevealConfig) -> Self {
        Self {
            debug,
            elements: vec![RevealElement {
                target: PREVIEW_SELECTOR.to_string(),
                options: EffectiveOptions::build(animation, config),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::TargetId;
    use crate::options::OptionOverrides;
    use chrono::Utc;

    fn target(id: i64, selector: &str, enabled: bool, options: OptionOverrides) -> Target {
        Target {
            id: TargetId::new(id),
            selector: selector.to_string(),
            label: String::new(),
            comment: String::new(),
            enabled,
            changed_at: Utc::now(),
            options,
        }
    }

    #[test]
    fn disabled_targets_are_skipped() {
        let targets = vec![
            target(1, ".a", true, OptionOverrides::default()),
            target(2, ".b", false, OptionOverrides::default()),
        ];
        let elements = build_elements(&targets, &AnimationOptions::default(), &RevealConfig::default());
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].target, ".a");
    }

    #[test]
    fn override_merges_onto_defaults() {
        let overrides = OptionOverrides {
            opacity: Some(0.5),
            ..Default::default()
        };
        let targets = vec![
            target(1, ".plain", true, OptionOverrides::default()),
            target(2, ".faded", true, overrides),
        ];
        let elements = build_elements(&targets, &AnimationOptions::default(), &RevealConfig::default());
        assert_eq!(elements[0].options.opacity, 0.0);
        assert_eq!(elements[1].options.opacity, 0.5);
    }

    #[test]
    fn preview_targets_sample_block() {
        let preview = ClientSettings::preview(true, &AnimationOptions::default(), &RevealConfig::default());
        assert!(preview.debug);
        assert_eq!(preview.elements.len(), 1);
        assert_eq!(preview.elements[0].target, ".scrollreveal__sample");
    }
}
