/// How a tracked sequence number relates to the receive window.
///
/// Every number maps to exactly one variant; the classifier is total over
/// its input domain.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Arrival {
    /// Smaller than the first number ever tracked; carries no information
    /// the window can use.
    Early,
    /// Advanced the window forward, or seeded it on the first call.
    InOrder,
    /// Filled a previously missing slot while still inside the window.
    OutOfOrder,
    /// Already observed while still inside the window.
    Duplicate,
    /// Older than the window's lower bound; too old to place.
    Late,
}

impl Arrival {
    /// Returns true if the number had already been observed.
    pub fn is_duplicate(self) -> bool {
        self == Arrival::Duplicate
    }
}
