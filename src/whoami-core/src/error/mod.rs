pub mod client;
pub mod config;
pub mod delegation;
pub mod foundation;
pub mod fs;
pub mod handoff;
pub mod session;
pub mod structured_file;
