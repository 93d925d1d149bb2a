//! Encoders packing unsigned and signed 32-bit integers into a bit stream.

use serde::{Deserialize, Serialize};

use crate::bits::BitSink;
use crate::constants::{BUFFER_LIMIT, DRAIN_COUNT, PRELUDE_ESCAPE};
use crate::width::{num_bits, plan_widths};
use crate::zigzag;

/// Encoder for unsigned 32-bit integer streams.
///
/// Values are buffered so the planner can look ahead: each symbol's width
/// delta is written before the symbol's value, and whether a symbol's top
/// bit can be elided depends on the widths of both neighbors. Writes drain
/// the buffer in halves once it fills; [`UintEncoder::flush`] drains the
/// rest and must be called exactly once, after at least one write.
///
/// A partially written encoder can be serialized and revived later; the
/// byte stream it eventually produces is identical.
///
/// # Example
/// ```
/// use widthrun::{UintDecoder, UintEncoder};
///
/// let mut enc = UintEncoder::new();
/// for value in [3, 7, 6, 0, 1] {
///     enc.write(value);
/// }
/// enc.flush();
///
/// let mut dec = UintDecoder::new(enc.code()).unwrap();
/// for value in [3, 7, 6, 0, 1] {
///     assert_eq!(dec.read().unwrap(), value);
/// }
/// ```
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct UintEncoder {
    /// Pending values not yet committed to the bit sink.
    buffer: Vec<u32>,
    sink: BitSink,
    /// Width of the most recently emitted symbol; before anything has been
    /// emitted it is 0 and imposes no planning constraint.
    most_recent_width: u8,
    started: bool,
    flushed: bool,
    /// Zero-width symbols seen since the last nonzero-width symbol. Emitted
    /// as one run-length code before the next nonzero symbol or at flush.
    pending_zeros: u32,
}

impl UintEncoder {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value to the stream.
    ///
    /// Must be called at least once; empty streams are not representable.
    #[inline]
    pub fn write(&mut self, value: u32) {
        debug_assert!(!self.flushed, "write after flush");
        self.buffer.push(value);
        if self.buffer.len() >= BUFFER_LIMIT {
            self.flush_some(DRAIN_COUNT);
        }
    }

    /// Drain the buffer, emit any pending zero run, and pad the bit sink to
    /// a byte boundary. Call once, after all writes.
    ///
    /// # Panics
    /// Panics if called twice or if nothing was written.
    pub fn flush(&mut self) {
        assert!(!self.flushed, "flush called twice");
        assert!(!self.buffer.is_empty(), "cannot flush an empty stream");
        self.flushed = true;
        self.flush_some(self.buffer.len());
        if self.pending_zeros > 0 {
            self.flush_pending_zeros();
        }
        self.sink.flush();
    }

    /// The encoded bytes.
    ///
    /// # Panics
    /// Panics if called before [`UintEncoder::flush`].
    #[must_use]
    pub fn code(&self) -> &[u8] {
        assert!(self.flushed, "code requested before flush");
        self.sink.code()
    }

    /// Consume the encoder and return the encoded bytes.
    ///
    /// # Panics
    /// Panics if called before [`UintEncoder::flush`].
    #[must_use]
    pub fn into_code(self) -> Vec<u8> {
        assert!(self.flushed, "code requested before flush");
        self.sink.into_bytes()
    }

    /// Emit the first `num_to_flush` buffered symbols.
    ///
    /// Widths are planned over the entire buffer each time so a partial
    /// drain still sees the look-ahead it needs; only a full drain appends
    /// the tail ghost (the final symbol's "next" width is its own).
    fn flush_some(&mut self, num_to_flush: usize) {
        let size = self.buffer.len();
        debug_assert!(num_to_flush <= size);
        if size == 0 {
            return;
        }
        let mut widths = plan_widths(&self.buffer, u32::from(self.most_recent_width));
        if num_to_flush == size {
            widths.push(widths[size - 1]);
        }

        if !self.started {
            let first = u32::from(widths[0]);
            self.sink.write(5, first.min(PRELUDE_ESCAPE));
            if first >= PRELUDE_ESCAPE {
                self.sink.write(1, first - PRELUDE_ESCAPE);
            }
            self.started = true;
            // The stream behaves as if a symbol of this width preceded the
            // first one; only the top-bit elision test sees it.
            self.most_recent_width = widths[0];
        }

        let mut prev = u32::from(self.most_recent_width);
        let mut cur = u32::from(widths[0]);
        for i in 0..num_to_flush {
            let next = u32::from(widths[i + 1]);
            self.write_code(prev, cur, next, self.buffer[i]);
            prev = cur;
            cur = next;
        }
        self.most_recent_width = widths[num_to_flush - 1];
        self.buffer.drain(..num_to_flush);
    }

    /// Emit one symbol: the delta code announcing the *next* width, then the
    /// value bits.
    ///
    /// The delta comes first because the reader needs the next width to know
    /// whether this symbol's top bit was elided. Zero-width symbols emit
    /// nothing here; they accumulate into `pending_zeros`.
    fn write_code(&mut self, prev: u32, cur: u32, next: u32, value: u32) {
        if cur == 0 {
            self.pending_zeros += 1;
            return;
        }
        if self.pending_zeros > 0 {
            self.flush_pending_zeros();
        }
        debug_assert!(num_bits(value) <= cur);

        if next == cur + 1 {
            // Up one step: a 1-bit then a 1-bit.
            self.sink.write(2, 3);
        } else if next + 1 == cur {
            // Down one step: a 1-bit then a 0-bit.
            self.sink.write(2, 1);
        } else {
            debug_assert_eq!(next, cur);
            self.sink.write(1, 0);
        }

        // When neither neighbor exceeds this width, the planner chose
        // exactly num_bits(value), so the top bit is known to be 1.
        let top_bit_redundant = prev <= cur && next <= cur;
        if top_bit_redundant {
            debug_assert!(value & (1 << (cur - 1)) != 0);
            self.sink.write(cur - 1, value ^ (1 << (cur - 1)));
        } else {
            self.sink.write(cur, value);
        }
    }

    /// Emit the run-length code for the accumulated zero-width symbols.
    ///
    /// A run of `k` zeros is written as `floor(log2(k))` 0-bits, a 1-bit,
    /// then `k` with its top bit stripped: 1 → `1`, 2..3 → `01x`,
    /// 4..7 → `001xx`, and so on. The 1-bit leads so the reader can tell
    /// where the exponent ends.
    fn flush_pending_zeros(&mut self) {
        debug_assert!(self.pending_zeros >= 1);
        let exponent = num_bits(self.pending_zeros) - 1;
        self.sink.write(exponent + 1, 1 << exponent);
        self.sink
            .write(exponent, self.pending_zeros & ((1u32 << exponent) - 1));
        self.pending_zeros = 0;
    }
}

/// Encoder for signed 32-bit integer streams.
///
/// Owns a [`UintEncoder`] and zig-zag maps each value at the boundary, so
/// values near zero of either sign stay cheap.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct IntEncoder {
    inner: UintEncoder,
}

impl IntEncoder {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value to the stream.
    #[inline]
    pub fn write(&mut self, value: i32) {
        self.inner.write(zigzag::encode(value));
    }

    /// See [`UintEncoder::flush`].
    pub fn flush(&mut self) {
        self.inner.flush();
    }

    /// See [`UintEncoder::code`].
    #[must_use]
    pub fn code(&self) -> &[u8] {
        self.inner.code()
    }

    /// See [`UintEncoder::into_code`].
    #[must_use]
    pub fn into_code(self) -> Vec<u8> {
        self.inner.into_code()
    }
}
