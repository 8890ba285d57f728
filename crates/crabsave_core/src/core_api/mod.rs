mod engine;
mod error;
mod types;

pub use engine::{Engine, SlotReport};
pub use error::{CoreError, CoreErrorCode};
pub use types::{
    ChallengeProgress, SaveStatus, Snapshot, TOTAL_CHALLENGES, UNLOCK_TOTALS, UnlockEntry,
};
