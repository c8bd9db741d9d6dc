//! # argb32
//!
//! Packed 32-bit ARGB colors and per-channel saturating arithmetic.
//!
//! A color is one `u32` holding four 8-bit channels, most significant first:
//! alpha (bits 31–24), red (23–16), green (15–8), blue (7–0). Arithmetic
//! works directly on the packed word; no channel ever carries or borrows
//! into its neighbour.
//!
//! ```rust
//! use argb32::packed;
//!
//! let [a, r, g, b] = packed::explode(0x8C5F_77AD);
//! assert_eq!([a, r, g, b], [0x8C, 0x5F, 0x77, 0xAD]);
//! assert_eq!(packed::add(0x8C5F_77AD, 0xCC37_5D5F), 0xFF96_D4FF);
//! ```
//!
//! ## Modules
//!
//! - [`packed`] — free functions on raw `u32` words. The building blocks.
//! - [`Argb32`] — a `#[repr(transparent)]` newtype with operators, castable
//!   from pixel buffers via bytemuck.
//! - [`rows`] — scalar loops applying the operations across caller rows.
//!
//! ## Feature flags
//!
//! - **`std`** (default) — implements `std::error::Error` for [`SizeError`].
//! - **`rgb`** — conversions to and from [`rgb`] crate pixel types
//!   (`Rgba<u8>`, `Bgra<u8>`).

#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

use core::fmt;

pub mod packed;

mod argb;
pub use argb::Argb32;

pub mod rows;

#[cfg(feature = "rgb")]
pub mod typed_rgb;

/// Buffer shape rejected by a row operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SizeError {
    /// Byte length is zero or not a multiple of 4.
    NotPixelAligned,
    /// Source and destination hold a different number of pixels.
    PixelCountMismatch,
    /// Stride is smaller than a row, or the buffer is shorter than
    /// `(height - 1) * stride + width * 4`.
    InvalidStride,
    /// Byte buffer is not aligned to 4 bytes, so it can't be viewed as words.
    Misaligned,
}

impl fmt::Display for SizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SizeError::NotPixelAligned => "buffer length is not a non-zero multiple of 4 bytes",
            SizeError::PixelCountMismatch => "source and destination pixel counts differ",
            SizeError::InvalidStride => "stride or buffer length does not fit the image",
            SizeError::Misaligned => "buffer is not 4-byte aligned",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SizeError {}
