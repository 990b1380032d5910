#![allow(non_snake_case)]
//! Welcome screen of the voice-shopping front-end, its config and shell.

pub mod config;
pub mod inspector;
pub mod shell;
pub mod welcome;

pub use config::{AppConfig, ConfigError, load_config};
pub use shell::Shell;
pub use welcome::{WelcomeView, WelcomeViewProps};
