// src/lib.rs
// Foresight - projects the outcome of a decision with a generative model

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod llm;
pub mod outcome;
pub mod web;

pub use error::{ForesightError, Result};
