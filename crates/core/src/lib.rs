//! Core types and configuration for stepform
//!
//! Domain types shared by the storage, service and HTTP crates.

mod config;
mod constants;
mod env_config;
mod form;

pub use config::*;
pub use constants::*;
pub use env_config::*;
pub use form::*;
