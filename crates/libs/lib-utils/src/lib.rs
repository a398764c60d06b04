//! # Utilities Library
//!
//! Environment variable helpers shared by the configuration layer and the CLI.

pub mod envs;

pub use envs::{get_env, get_env_opt, get_env_or, get_env_parse};
