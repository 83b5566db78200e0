// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod codec;
pub mod config;
pub mod core;
pub mod courses;
pub mod error;
pub mod file;
pub mod gui;
pub mod messaging;
pub mod model;
pub mod notify;
pub mod parser;
pub mod specs;
pub mod store;

pub use error::{Error, Result};
