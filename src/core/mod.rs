// src/core/mod.rs
pub mod config;
pub mod error;
pub mod ports;
pub mod stop;
