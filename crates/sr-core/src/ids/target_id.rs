use serde::{Deserialize, Serialize};

use super::id_macro::impl_int_id;

/// Surrogate key of a reveal target row.
///
/// `TargetId::NEW` (0) marks a target that has not been inserted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetId(i64);

impl_int_id!(TargetId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_the_new_sentinel() {
        assert!(TargetId::NEW.is_new());
        assert!(TargetId::default().is_new());
        assert!(!TargetId::new(5).is_new());
    }

    #[test]
    fn parses_route_segments() {
        assert_eq!("42".parse::<TargetId>().unwrap(), TargetId::new(42));
        assert!("abc".parse::<TargetId>().is_err());
    }
}
