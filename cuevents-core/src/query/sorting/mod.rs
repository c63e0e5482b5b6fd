//! Sorting module for event lists
//!
//! This module provides:
//! - Sort key extraction and comparison
//! - The per-key comparator table
//! - Per-screen sort contexts
//! - The sort controller state machine

pub mod context;
pub mod controller;
pub mod keys;
pub mod simple;
pub mod utils;


pub use context::*;
pub use controller::*;
pub use keys::*;
pub use simple::*;
