pub mod config;
pub mod database;
pub mod errors;
pub mod models;
pub mod services;
pub mod web;

pub use config::Config;
pub use database::ActivityStore;
pub use errors::{ActivityError, StartupError};
