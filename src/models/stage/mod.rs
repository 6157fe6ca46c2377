mod methods;
mod transitions;
mod types;


pub use types::{Stage, StageDocument, StageStatus};
