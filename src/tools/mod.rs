//! FitCoach tools module
//!
//! MCP tool implementations for the fitness chat assistant.

pub mod bmi;
pub mod chat;
pub mod exercise;
pub mod motivation;
pub mod nutrition;
pub mod status;
