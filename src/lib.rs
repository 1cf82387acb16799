// src/lib.rs
// Library interface for ct-dash
pub mod cli;
pub mod client;
pub mod config;
pub mod duration;
pub mod error;
pub mod types;
