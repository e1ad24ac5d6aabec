pub mod whoami_config;
