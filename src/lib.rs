// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod progress;
pub mod record;

pub mod csv;
pub mod file;
pub mod normalize;
pub mod picture;
pub mod runner;
pub mod store;
