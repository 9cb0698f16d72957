//! Database connectors with explicit lifecycle
//!
//! Connections are opened by the bootstrap layer and the resulting handles
//! are passed into repositories; nothing in here is global state.

pub mod mongodb;
