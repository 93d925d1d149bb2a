//! Internal constants for the adaptive width codec.

/// Maximum field width; values are 32-bit.
pub const MAX_WIDTH: u32 = 32;

/// Buffer size at which a write triggers a partial drain.
///
/// Draining half of a 64-entry buffer leaves 32 symbols of look-ahead, which
/// covers the longest possible backward influence of a later value on an
/// earlier width (a width-32 value raises its neighbors by at most 31 steps).
/// Changing either threshold changes the emitted widths and breaks
/// compatibility with previously written streams.
pub const BUFFER_LIMIT: usize = 64;

/// Number of symbols emitted per partial drain.
pub const DRAIN_COUNT: usize = 32;

/// Widths below this value fit the 5-bit prelude verbatim; 31 and 32 are
/// written as 31 plus one extra bit.
pub const PRELUDE_ESCAPE: u32 = 31;
