//! Circular receive window for classifying sequence-number arrivals.
//!
//! The window tracks the trailing `capacity` sequence numbers ending at the
//! highest number seen so far. Each slot holds a single "seen" flag; a
//! cursor marks the next slot overwritten when the window moves forward.
//!
//! # Design
//!
//! - Slots live in a fixed boxed slice. Index arithmetic is formulated so
//!   intermediate values never go negative before the modulo.
//! - After the first call, slot `cursor - 1 mod capacity` holds the highest
//!   number, slot `cursor - 2 mod capacity` the one below it, and so on
//!   down to the window's lower bound.
//! - `pending` counts the `false` flags in the buffer and always equals a
//!   direct recount of the slots.
//!
//! # Arithmetic Range
//!
//! Sequence numbers are `i64`. Forward and backward distances are computed
//! with `wrapping_sub` cast to `u64`, which is the exact unsigned distance
//! for any pair of values once the branch taken has established the sign of
//! the difference. No input pair can overflow.

use seqwatch_core::{config::Config, error::ErrorKind};

use crate::arrival::Arrival;

/// 64-bit signed sequence number tracked by the window.
pub type SequenceNumber = i64;

/// Fixed-capacity circular window classifying sequence-number arrivals.
///
/// Not internally thread-safe: callers needing concurrent access must
/// serialize calls externally.
#[derive(Debug, Clone)]
pub struct ReceiveWindow {
    /// Seen flag per slot. All `true` at rest: nothing outstanding.
    seen: Box<[bool]>,
    /// Next slot overwritten on forward advancement.
    cursor: usize,
    /// First number ever tracked; `None` until the seeding call.
    first: Option<SequenceNumber>,
    /// Highest number tracked so far. Meaningful once `first` is set.
    max: SequenceNumber,
    /// Count of `false` flags currently in `seen`.
    pending: usize,
}

impl ReceiveWindow {
    /// Creates a window tracking `capacity` sequence numbers.
    pub fn with_capacity(capacity: usize) -> Result<Self, ErrorKind> {
        if capacity == 0 {
            return Err(ErrorKind::InvalidCapacity(capacity));
        }
        Ok(Self {
            seen: vec![true; capacity].into_boxed_slice(),
            cursor: 0,
            first: None,
            max: 0,
            pending: 0,
        })
    }

    /// Creates a window with the capacity given by `config`.
    pub fn from_config(config: &Config) -> Result<Self, ErrorKind> {
        Self::with_capacity(config.window_capacity)
    }

    /// Returns the number of slots in the window.
    pub fn capacity(&self) -> usize {
        self.seen.len()
    }

    /// Returns how many numbers inside the window are still expected.
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Returns the first number ever tracked.
    pub fn first_number(&self) -> Result<SequenceNumber, ErrorKind> {
        self.first.ok_or(ErrorKind::NotStarted)
    }

    /// Returns the highest number tracked so far.
    pub fn max_number(&self) -> Result<SequenceNumber, ErrorKind> {
        match self.first {
            Some(_) => Ok(self.max),
            None => Err(ErrorKind::NotStarted),
        }
    }

    /// Classifies `number` and moves the window as needed.
    ///
    /// Returns the classification together with how many expected numbers
    /// this call evicted from the window without them ever being observed.
    pub fn track(&mut self, number: SequenceNumber) -> (Arrival, u64) {
        let first = match self.first {
            Some(first) => first,
            None => {
                // Seeding call: the number is implicitly seen and never
                // occupies a slot that must later be matched.
                self.first = Some(number);
                self.max = number;
                return (Arrival::InOrder, 0);
            }
        };

        if number > self.max {
            let lost = self.advance(number);
            return (Arrival::InOrder, lost);
        }

        if number < first {
            // Numbers before the very first observed number carry no
            // information the window can use.
            return (Arrival::Early, 0);
        }

        let lag = self.max.wrapping_sub(number) as u64;
        if lag >= self.capacity() as u64 {
            // The slot for this number was already evicted.
            return (Arrival::Late, 0);
        }

        let pos = self.slot_behind(lag as usize);
        if self.seen[pos] {
            (Arrival::Duplicate, 0)
        } else {
            self.seen[pos] = true;
            self.pending -= 1;
            (Arrival::OutOfOrder, 0)
        }
    }

    /// Clears all tracking state, as if freshly constructed.
    pub fn reset(&mut self) {
        self.seen.fill(true);
        self.cursor = 0;
        self.first = None;
        self.max = 0;
        self.pending = 0;
    }

    /// Moves the window forward so `number` becomes the highest tracked
    /// number. Returns how many expected numbers were evicted unseen.
    fn advance(&mut self, number: SequenceNumber) -> u64 {
        let capacity = self.capacity();
        let todo = number.wrapping_sub(self.max) as u64;
        let mut lost = 0u64;

        if todo < capacity as u64 {
            // Short jump: walk the slots one number at a time. A `false`
            // flag under the cursor means the number assigned to that slot
            // is leaving the window without ever having arrived. The final
            // slot is `number` itself, now seen; every slot before it opens
            // for a number strictly between the old maximum and `number`.
            for i in 0..todo {
                if !self.seen[self.cursor] {
                    lost += 1;
                }
                self.seen[self.cursor] = i == todo - 1;
                self.cursor = (self.cursor + 1) % capacity;
            }
            // Exact net change in false flags: `todo - 1` slots opened,
            // minus the evicted ones that were already false.
            self.pending = self.pending + (todo as usize - 1) - lost as usize;
        } else {
            // The jump turns the entire window over: every still-pending
            // slot is evicted, and every intermediate number that both
            // enters and leaves the window within this one call is lost
            // with it. State and lost count are identical to the walk
            // above, at a cost bounded by the capacity.
            lost = self.pending as u64 + (todo - capacity as u64);
            let step = (todo % capacity as u64) as usize;
            self.cursor = (self.cursor + step) % capacity;
            self.seen.fill(false);
            let newest = self.slot_behind(0);
            self.seen[newest] = true;
            self.pending = capacity - 1;
        }

        self.max = number;
        lost
    }

    /// Maps a lag behind the highest tracked number to its slot index.
    /// The newest slot sits just behind the cursor.
    fn slot_behind(&self, lag: usize) -> usize {
        let capacity = self.capacity();
        (self.cursor + capacity - lag - 1) % capacity
    }
}
