//! Library surface of the Waypoint demo CLI
//!
//! Exposes the command implementations, the built-in gazetteer provider,
//! and the scenario player so integration tests can drive them directly.

pub mod cmd;
pub mod gazetteer;
pub mod player;
pub mod scenario;
pub mod util;
