pub mod constants;
pub mod stage;

pub use stage::{Stage, StageDocument, StageStatus};
