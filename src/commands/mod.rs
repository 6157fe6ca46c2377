pub mod common;
pub mod init;
pub mod question;
pub mod session;
pub mod stage;
pub mod stages;
