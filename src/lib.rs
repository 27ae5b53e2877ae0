//! stackq - search Stack Overflow questions from the terminal.
//!
//! The library holds everything except the event loop, so integration tests
//! can drive the coordinator, the connectivity monitor and the renderer
//! directly.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod connectivity;
pub mod coordinator;
pub mod error;
pub mod models;
pub mod startup;
pub mod terminal;
pub mod traits;
pub mod ui;
