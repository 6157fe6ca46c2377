pub mod commands;
pub mod completions;
pub mod config;
pub mod export;
pub mod fs;
pub mod models;
pub mod session;
pub mod validation;
pub mod workflow;
