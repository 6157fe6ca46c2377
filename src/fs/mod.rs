pub mod atomic;
pub mod export_files;
pub mod stage_store;

pub use stage_store::StoreError;
