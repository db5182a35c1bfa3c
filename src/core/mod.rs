//! Core functionality for command dispatch
//!
//! Contains the mapping from parsed commands to external git invocations.

pub mod dispatch;

pub use dispatch::{argument_vector, Dispatcher};
