//! Command and Reply models for the line driver
//!
//! Parses text commands read from stdin and renders cache results back
//! as single reply lines.

pub mod command;
pub mod reply;

// Re-export commonly used types
pub use command::Command;
pub use reply::Reply;
