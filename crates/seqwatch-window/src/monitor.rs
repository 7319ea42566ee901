//! Running statistics over window classifications.
//!
//! This module wraps a [`ReceiveWindow`](crate::window::ReceiveWindow) and
//! turns each classification into running totals: in-order, out-of-order,
//! duplicate, lost, and late counts, plus the pending count read through
//! from the window.

use seqwatch_core::{config::Config, error::ErrorKind};
use tracing::{debug, trace};

use crate::{
    arrival::Arrival,
    window::{ReceiveWindow, SequenceNumber},
};

/// Immutable snapshot of classification totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequenceReport {
    /// Numbers that advanced the window, including the seeding call.
    pub in_order: u64,
    /// Numbers that filled a missing slot inside the window.
    pub out_of_order: u64,
    /// Numbers observed more than once while inside the window.
    pub duplicate: u64,
    /// Expected numbers evicted from the window without being observed.
    pub lost: u64,
    /// Numbers older than the window's lower bound.
    pub late: u64,
    /// Numbers inside the window still expected.
    pub pending: u64,
}

impl SequenceReport {
    /// Numbers that arrived and were placed, in order or not.
    pub fn delivered(&self) -> u64 {
        self.in_order + self.out_of_order
    }

    /// Returns the loss rate (0.0 to 1.0) among numbers whose fate is
    /// settled: delivered or lost. Pending numbers are not counted.
    pub fn loss_rate(&self) -> f32 {
        let settled = self.delivered() + self.lost;
        if settled == 0 {
            return 0.0;
        }
        self.lost as f32 / settled as f32
    }
}

/// Wraps a [`ReceiveWindow`] and keeps running totals per classification.
///
/// Like the window itself, a monitor is not safe for concurrent
/// invocation; callers serialize access externally.
#[derive(Debug, Clone)]
pub struct SequenceMonitor {
    window: ReceiveWindow,
    in_order: u64,
    out_of_order: u64,
    duplicate: u64,
    lost: u64,
    late: u64,
}

impl SequenceMonitor {
    /// Creates a monitor over a window of `capacity` sequence numbers.
    pub fn with_capacity(capacity: usize) -> Result<Self, ErrorKind> {
        Ok(Self::over(ReceiveWindow::with_capacity(capacity)?))
    }

    /// Creates a monitor with the capacity given by `config`.
    pub fn from_config(config: &Config) -> Result<Self, ErrorKind> {
        Ok(Self::over(ReceiveWindow::from_config(config)?))
    }

    fn over(window: ReceiveWindow) -> Self {
        Self {
            window,
            in_order: 0,
            out_of_order: 0,
            duplicate: 0,
            lost: 0,
            late: 0,
        }
    }

    /// Classifies `number`, updates the totals, and returns whether the
    /// number was a duplicate.
    ///
    /// Early numbers update nothing: numbers before the first observed
    /// number carry no statistical meaning. The lost delta is added
    /// regardless of the call's own classification.
    pub fn observe(&mut self, number: SequenceNumber) -> bool {
        let (arrival, lost) = self.window.track(number);
        if lost > 0 {
            self.lost += lost;
            debug!(
                "{} sequence number(s) evicted unseen while tracking {}",
                lost, number
            );
        }
        match arrival {
            Arrival::Early => {
                trace!("ignoring early sequence number {}", number);
            }
            Arrival::InOrder => self.in_order += 1,
            Arrival::OutOfOrder => {
                self.out_of_order += 1;
                trace!("sequence number {} recovered out of order", number);
            }
            Arrival::Duplicate => {
                self.duplicate += 1;
                trace!("duplicate sequence number {}", number);
            }
            Arrival::Late => {
                self.late += 1;
                trace!("sequence number {} arrived too late to place", number);
            }
        }
        arrival.is_duplicate()
    }

    /// Returns a snapshot of the totals.
    pub fn report(&self) -> SequenceReport {
        SequenceReport {
            in_order: self.in_order,
            out_of_order: self.out_of_order,
            duplicate: self.duplicate,
            lost: self.lost,
            late: self.late,
            pending: self.window.pending() as u64,
        }
    }

    /// Read access to the underlying window.
    pub fn window(&self) -> &ReceiveWindow {
        &self.window
    }

    /// Resets all totals and starts over with an empty window of the same
    /// capacity.
    pub fn reset(&mut self) {
        self.window.reset();
        self.in_order = 0;
        self.out_of_order = 0;
        self.duplicate = 0;
        self.lost = 0;
        self.late = 0;
    }
}
