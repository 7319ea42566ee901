#![warn(missing_docs)]

//! seqwatch-window: sequence-window classification and statistics.

/// Arrival classification for tracked sequence numbers.
pub mod arrival;
/// Running statistics over window classifications.
pub mod monitor;
/// The circular receive window.
pub mod window;

pub use arrival::Arrival;
pub use monitor::{SequenceMonitor, SequenceReport};
pub use window::{ReceiveWindow, SequenceNumber};
