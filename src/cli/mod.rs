//! CLI module for the echo-jot application

mod app;
mod main;

pub use app::*;
pub use main::*;
