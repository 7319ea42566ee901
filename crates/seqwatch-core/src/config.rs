use crate::constants::DEFAULT_WINDOW_CAPACITY;

/// Configuration options to tune window tracking behavior.
#[derive(Clone, Debug)]
pub struct Config {
    /// Number of sequence numbers the receive window keeps track of.
    ///
    /// A number older than the highest tracked number minus this capacity
    /// can no longer be placed and is classified as late. Must be at least
    /// 1; construction fails otherwise.
    pub window_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { window_capacity: DEFAULT_WINDOW_CAPACITY }
    }
}
