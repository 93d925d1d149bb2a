//! `widthrun` - Adaptive bit-width compression for correlated integer streams
//!
//! A variable-width bit-packer for sequences of 32-bit integers whose
//! magnitudes are locally correlated (small values tend to follow small
//! values), such as audio residuals. Each value is packed in a field just
//! wide enough to hold it, and the field width tracks the signal instead of
//! being transmitted per symbol.
//!
//! # Example
//! ```
//! use widthrun::{IntDecoder, IntEncoder};
//!
//! let samples = [0, -1, 2, 5, -13, 6, 0, 0, 1];
//!
//! let mut enc = IntEncoder::new();
//! for &s in &samples {
//!     enc.write(s);
//! }
//! enc.flush();
//! let code = enc.code();
//!
//! let mut dec = IntDecoder::new(code).unwrap();
//! for &s in &samples {
//!     assert_eq!(dec.read().unwrap(), s);
//! }
//! ```
//!
//! # Encoding Format
//!
//! All fields are bit-granular and LSB-first; the final partial byte is
//! zero-padded. There is no length header and no terminator: the caller
//! transports the element count out of band.
//!
//! - **Prelude**: the first symbol's width in 5 bits, plus one extra bit
//!   when that width is 31 or 32.
//! - **Width tracking**: adjacent field widths differ by at most one, so a
//!   prefix code of 1-2 bits announces each transition (`0` stay, `10`
//!   down, `11` up). The delta for a symbol is written *before* the
//!   symbol's value because the reader needs the next width to know whether
//!   the value's top bit was elided.
//! - **Top-bit elision**: when neither neighboring width exceeds a symbol's
//!   width, the width equals the value's exact bit count, so the value's
//!   most significant bit is implicitly 1 and is not written.
//! - **Zero runs**: symbols of width zero emit nothing individually. A run
//!   of `k` of them is announced once, as a unary exponent
//!   `floor(log2(k))`, a terminating 1-bit, and `k` with its top bit
//!   stripped: `2*floor(log2(k)) + 1` bits in total.
//!
//! Decoding is symmetric: the reader reconstructs the width sequence from
//! the prelude, the delta codes, and the zero-run codes alone.

pub mod bits;
mod constants;
mod decoder;
mod encoder;
mod error;
mod width;
pub mod zigzag;

pub use decoder::{IntDecoder, UintDecoder};
pub use encoder::{IntEncoder, UintEncoder};
pub use error::DecodeError;

/// Compress a nonempty slice of unsigned values into a byte vector.
///
/// # Panics
/// Panics if `values` is empty; empty streams are not representable.
#[must_use]
pub fn compress(values: &[u32]) -> Vec<u8> {
    let mut enc = UintEncoder::new();
    for &value in values {
        enc.write(value);
    }
    enc.flush();
    enc.into_code()
}

/// Decompress `count` unsigned values from `code`.
///
/// # Errors
/// Returns an error if `code` is truncated or corrupted.
pub fn decompress(code: &[u8], count: usize) -> Result<Vec<u32>, DecodeError> {
    let mut dec = UintDecoder::new(code)?;
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        values.push(dec.read()?);
    }
    Ok(values)
}

/// Compress a nonempty slice of signed values into a byte vector.
///
/// # Panics
/// Panics if `values` is empty; empty streams are not representable.
#[must_use]
pub fn compress_signed(values: &[i32]) -> Vec<u8> {
    let mut enc = IntEncoder::new();
    for &value in values {
        enc.write(value);
    }
    enc.flush();
    enc.into_code()
}

/// Decompress `count` signed values from `code`.
///
/// # Errors
/// Returns an error if `code` is truncated or corrupted.
pub fn decompress_signed(code: &[u8], count: usize) -> Result<Vec<i32>, DecodeError> {
    let mut dec = IntDecoder::new(code)?;
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        values.push(dec.read()?);
    }
    Ok(values)
}
