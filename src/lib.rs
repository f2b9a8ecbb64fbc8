// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod core;
pub mod specs;

pub mod aggregate;
pub mod error;
pub mod fetch;
pub mod params;
pub mod render;
pub mod report;
pub mod select;
