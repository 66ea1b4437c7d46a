// src/config/mod.rs
// Process configuration

mod env;

pub use env::{
    Config, ConfigIssue, ConfigValidation, DEFAULT_API_BASE, DEFAULT_HOST, DEFAULT_MODEL,
    DEFAULT_PORT, Severity,
};
