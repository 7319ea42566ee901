#![warn(missing_docs)]

//! Seqwatch: a small public API facade for the workspace.
//!
//! This crate provides a clean, stable surface that re-exports the types
//! needed to classify a stream of sequence numbers:
//!
//! - Window classification (`ReceiveWindow`, `Arrival`)
//! - Running statistics (`SequenceMonitor`, `SequenceReport`)
//! - Core configuration (`Config`) and errors (`ErrorKind`)
//!
//! Example
//! ```
//! use seqwatch::SequenceMonitor;
//!
//! let mut monitor = SequenceMonitor::with_capacity(8).unwrap();
//! for n in [0i64, 1, 3, 4, 2] {
//!     monitor.observe(n);
//! }
//!
//! let report = monitor.report();
//! assert_eq!(report.in_order, 4);
//! assert_eq!(report.out_of_order, 1);
//! assert_eq!(report.pending, 0);
//! ```

// Core config and errors
pub use seqwatch_core::{config::Config, error::ErrorKind};
// Window: classification and statistics
pub use seqwatch_window::{
    Arrival, ReceiveWindow, SequenceMonitor, SequenceNumber, SequenceReport,
};

/// Convenience prelude with the most commonly used items.
pub mod prelude {
    pub use crate::{
        Arrival, Config, ErrorKind, ReceiveWindow, SequenceMonitor, SequenceNumber,
        SequenceReport,
    };
}
