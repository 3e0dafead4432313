//! Configuration management for to-doc

pub mod global_config;

pub use global_config::{CoreConfig, FilterConfig, GlobalConfig};
