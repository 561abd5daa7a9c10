//! Built-in data catalog
//!
//! Static fallback tables used when the remote API is unavailable or not
//! configured: exercise database and motivation text.

pub mod exercises;
pub mod motivation;
