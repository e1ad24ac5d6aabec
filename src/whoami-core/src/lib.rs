pub mod client;
pub mod config;
pub mod error;
pub mod fs;
pub mod handoff;
pub mod json;
pub mod location;
pub mod principal;
pub mod session;
pub mod view;
