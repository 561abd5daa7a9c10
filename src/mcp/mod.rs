//! MCP module
//!
//! FitCoach MCP server implementation.

pub mod server;

pub use server::FitCoachService;
