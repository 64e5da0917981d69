pub mod config;

pub use config::{MashupConfig, CONFIG_ENV};
