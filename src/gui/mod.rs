// src/gui/mod.rs
pub mod app;
pub mod components;
pub mod notify;

pub use app::run;
