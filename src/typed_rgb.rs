//! Conversions between [`Argb32`] and [`rgb`] crate pixel types.
//!
//! Single pixels convert with `From`; slices convert with the `*_slice`
//! copies, which check that both sides hold the same number of pixels.
//!
//! ```rust
//! use argb32::Argb32;
//! use rgb::{Bgra, Rgba};
//!
//! let c = Argb32::from(Rgba::new(0x5F, 0x77, 0xAD, 0x8C));
//! assert_eq!(c, Argb32(0x8C5F_77AD));
//! assert_eq!(Bgra::from(c), Bgra { b: 0xAD, g: 0x77, r: 0x5F, a: 0x8C });
//! ```

use rgb::{Bgra, Rgba};

use crate::{Argb32, SizeError};

// ---------------------------------------------------------------------------
// Per-pixel conversions
// ---------------------------------------------------------------------------

impl From<Rgba<u8>> for Argb32 {
    #[inline]
    fn from(px: Rgba<u8>) -> Self {
        Argb32::new(px.a, px.r, px.g, px.b)
    }
}

impl From<Argb32> for Rgba<u8> {
    #[inline]
    fn from(c: Argb32) -> Self {
        Rgba::new(c.r(), c.g(), c.b(), c.a())
    }
}

impl From<Bgra<u8>> for Argb32 {
    #[inline]
    fn from(px: Bgra<u8>) -> Self {
        Argb32::new(px.a, px.r, px.g, px.b)
    }
}

impl From<Argb32> for Bgra<u8> {
    #[inline]
    fn from(c: Argb32) -> Self {
        Bgra {
            b: c.b(),
            g: c.g(),
            r: c.r(),
            a: c.a(),
        }
    }
}

// ---------------------------------------------------------------------------
// Slice copies
// ---------------------------------------------------------------------------

fn convert_slice<S: Copy, D>(src: &[S], dst: &mut [D], f: impl Fn(S) -> D) -> Result<(), SizeError> {
    if src.len() != dst.len() {
        return Err(SizeError::PixelCountMismatch);
    }
    for (s, d) in src.iter().zip(dst.iter_mut()) {
        *d = f(*s);
    }
    Ok(())
}

/// Copy `&[Rgba<u8>]` into `&mut [Argb32]`.
pub fn from_rgba_slice(src: &[Rgba<u8>], dst: &mut [Argb32]) -> Result<(), SizeError> {
    convert_slice(src, dst, Argb32::from)
}

/// Copy `&[Argb32]` into `&mut [Rgba<u8>]`.
pub fn to_rgba_slice(src: &[Argb32], dst: &mut [Rgba<u8>]) -> Result<(), SizeError> {
    convert_slice(src, dst, Rgba::from)
}

/// Copy `&[Bgra<u8>]` into `&mut [Argb32]`.
pub fn from_bgra_slice(src: &[Bgra<u8>], dst: &mut [Argb32]) -> Result<(), SizeError> {
    convert_slice(src, dst, Argb32::from)
}

/// Copy `&[Argb32]` into `&mut [Bgra<u8>]`.
pub fn to_bgra_slice(src: &[Argb32], dst: &mut [Bgra<u8>]) -> Result<(), SizeError> {
    convert_slice(src, dst, Bgra::from)
}
