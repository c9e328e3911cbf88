// src/core/mod.rs

pub mod links;
pub mod net;
