pub mod diagnosis;
pub mod display;
pub mod environment;
pub mod error;
pub mod host;
pub mod logger;
pub mod provider;
