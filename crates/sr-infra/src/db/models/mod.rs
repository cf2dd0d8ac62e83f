mod reveal_target_row;

pub use reveal_target_row::{NewRevealTargetRow, RevealTargetRow};
