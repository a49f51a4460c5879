//! Echo Jot journaling library
//!
//! This library discovers markdown journal entries with YAML frontmatter in
//! date-named folders, aggregates them into sorted day groups, and remembers
//! the selected journal folder across sessions.

mod access;
mod block;
mod cli;
mod errors;
mod frontmatter;
mod handle_store;
mod scanner;
mod stats;
mod types;

// Re-export key components
pub use access::*;
pub use block::*;
pub use cli::*;
pub use errors::*;
pub use frontmatter::*;
pub use handle_store::*;
pub use scanner::*;
pub use stats::*;
pub use types::*;
