//! Decoders recovering integer streams written by the encoders.

use crate::bits::BitSource;
use crate::constants::MAX_WIDTH;
use crate::error::DecodeError;
use crate::zigzag;

/// Decoder for streams written by [`crate::UintEncoder`].
///
/// The stream carries no element count; the caller knows how many values to
/// read and stops there. Reading past the logical end is undefined: while
/// padding bits last the decoder may return garbage, and once the byte range
/// is exhausted it returns [`DecodeError::Truncated`]. After any error the
/// decoder state is unspecified and further reads must not be attempted.
pub struct UintDecoder<'a> {
    source: BitSource<'a>,
    /// Width of the most recently read symbol.
    prev_width: u32,
    /// Width of the symbol about to be read.
    cur_width: u32,
    /// Zeros remaining in a run whose length code has been consumed.
    /// `None` when no run is in progress.
    zero_run: Option<u32>,
}

impl<'a> UintDecoder<'a> {
    /// Construct a decoder over `code`, consuming the 5- or 6-bit prelude
    /// that carries the first symbol's width.
    pub fn new(code: &'a [u8]) -> Result<Self, DecodeError> {
        let mut source = BitSource::new(code);
        let mut width = source.read(5).ok_or(DecodeError::Truncated)?;
        if width == 31 {
            // One extra bit distinguishes an initial width of 31 from 32.
            width += source.read(1).ok_or(DecodeError::Truncated)?;
        }
        Ok(Self {
            source,
            prev_width: width,
            cur_width: width,
            zero_run: None,
        })
    }

    /// Read one value.
    ///
    /// # Errors
    /// [`DecodeError::Truncated`] if the byte range runs out;
    /// [`DecodeError::WidthOverflow`] or [`DecodeError::ZeroRunOverflow`] on
    /// transitions no valid encoder produces.
    pub fn read(&mut self) -> Result<u32, DecodeError> {
        let prev = self.prev_width;
        let cur = self.cur_width;

        let next = if cur > 0 {
            if self.read_bits(1)? == 0 {
                cur
            } else if self.read_bits(1)? == 1 {
                if cur + 1 > MAX_WIDTH {
                    return Err(DecodeError::WidthOverflow { width: cur + 1 });
                }
                cur + 1
            } else {
                cur - 1
            }
        } else if let Some(remaining) = self.zero_run {
            // Mid-run: the length code was already consumed. The run ends
            // when the counter hits zero, and the symbol after a run always
            // has width 1.
            self.zero_run = remaining.checked_sub(1);
            if remaining == 0 {
                1
            } else {
                0
            }
        } else {
            // Entering a run: unary exponent, a 1-bit, then the run length
            // with its top bit stripped.
            let mut exponent = 0u32;
            while self.read_bits(1)? == 0 {
                exponent += 1;
                if exponent > 31 {
                    return Err(DecodeError::ZeroRunOverflow);
                }
            }
            let low = self.read_bits(exponent)?;
            let run_length = (1u32 << exponent) + low;
            // The current symbol is the run's first zero and the branch
            // below decides the second, hence minus two; a run of one
            // leaves no counter at all.
            self.zero_run = run_length.checked_sub(2);
            if run_length == 1 {
                1
            } else {
                0
            }
        };

        let top_bit_redundant = prev <= cur && next <= cur && cur > 0;
        let value = if top_bit_redundant {
            self.read_bits(cur - 1)? | (1 << (cur - 1))
        } else {
            self.read_bits(cur)?
        };
        self.prev_width = cur;
        self.cur_width = next;
        Ok(value)
    }

    /// Index one past the last byte touched. Useful when another bit stream
    /// is placed directly after this one.
    #[must_use]
    pub fn next_code(&self) -> usize {
        self.source.next_code()
    }

    #[inline]
    fn read_bits(&mut self, nbits: u32) -> Result<u32, DecodeError> {
        self.source.read(nbits).ok_or(DecodeError::Truncated)
    }
}

/// Decoder for streams written by [`crate::IntEncoder`].
pub struct IntDecoder<'a> {
    inner: UintDecoder<'a>,
}

impl<'a> IntDecoder<'a> {
    /// See [`UintDecoder::new`].
    pub fn new(code: &'a [u8]) -> Result<Self, DecodeError> {
        Ok(Self {
            inner: UintDecoder::new(code)?,
        })
    }

    /// Read one value.
    ///
    /// # Errors
    /// See [`UintDecoder::read`].
    pub fn read(&mut self) -> Result<i32, DecodeError> {
        self.inner.read().map(zigzag::decode)
    }

    /// See [`UintDecoder::next_code`].
    #[must_use]
    pub fn next_code(&self) -> usize {
        self.inner.next_code()
    }
}
