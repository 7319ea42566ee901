#![warn(missing_docs)]

//! seqwatch-core: foundational types and defaults.
//!
//! This crate provides the minimal set of core utilities shared across all
//! layers:
//! - Configuration types
//! - Error handling
//! - Default constants
//!
//! The classification algorithm itself lives in `seqwatch-window`; this
//! crate stays dependency-free so the surface shared between layers is as
//! small as possible.

/// Defaults shared across layers.
pub mod constants {
    /// Default number of sequence numbers a receive window keeps track of.
    ///
    /// 1024 slots covers roughly a second of traffic at 1k messages/sec
    /// while keeping the per-window footprint at one flag per slot.
    pub const DEFAULT_WINDOW_CAPACITY: usize = 1024;
}

/// Configuration options for window tracking.
pub mod config;
/// Error types.
pub mod error;
