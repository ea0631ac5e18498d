pub mod config;
mod config_env;
pub mod jurimetry;
pub mod models;
pub mod repos;
