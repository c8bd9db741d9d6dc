// ---------------------------------------------------------------------------
// Row-level helpers: the packed operations applied across caller-owned rows.
//
// Plain scalar loops; the per-pixel work is a handful of ALU ops, so the
// compiler is left to unroll. No allocation, caller owns every buffer.
// ---------------------------------------------------------------------------

use crate::{Argb32, SizeError, packed};

// ===========================================================================
// Validation helpers
// ===========================================================================

#[inline]
fn check_bytes(len: usize) -> Result<(), SizeError> {
    if len == 0 || !len.is_multiple_of(4) {
        Err(SizeError::NotPixelAligned)
    } else {
        Ok(())
    }
}

#[inline]
fn check_pair(dst_len: usize, src_len: usize) -> Result<(), SizeError> {
    if dst_len != src_len {
        Err(SizeError::PixelCountMismatch)
    } else {
        Ok(())
    }
}

#[inline]
fn check_strided(len: usize, width: usize, height: usize, stride: usize) -> Result<(), SizeError> {
    if width == 0 || height == 0 {
        return Err(SizeError::InvalidStride);
    }
    let row_bytes = width.checked_mul(4).ok_or(SizeError::InvalidStride)?;
    if row_bytes > stride {
        return Err(SizeError::InvalidStride);
    }
    let total = (height - 1)
        .checked_mul(stride)
        .ok_or(SizeError::InvalidStride)?
        .checked_add(row_bytes)
        .ok_or(SizeError::InvalidStride)?;
    if len < total {
        return Err(SizeError::InvalidStride);
    }
    Ok(())
}

fn cast_error(e: bytemuck::PodCastError) -> SizeError {
    match e {
        bytemuck::PodCastError::TargetAlignmentGreaterAndInputNotAligned => SizeError::Misaligned,
        _ => SizeError::NotPixelAligned,
    }
}

// ===========================================================================
// Buffer views
// ===========================================================================

/// View a byte buffer as packed colors without copying.
///
/// Each 4-byte group is read as a native-endian word, so on little-endian
/// targets the bytes are in BGRA order.
pub fn pixels(buf: &[u8]) -> Result<&[Argb32], SizeError> {
    check_bytes(buf.len())?;
    bytemuck::try_cast_slice(buf).map_err(cast_error)
}

/// Mutable version of [`pixels`].
pub fn pixels_mut(buf: &mut [u8]) -> Result<&mut [Argb32], SizeError> {
    check_bytes(buf.len())?;
    bytemuck::try_cast_slice_mut(buf).map_err(cast_error)
}

// ===========================================================================
// Public API — in-place, one operand
// ===========================================================================

/// Replace the alpha channel of every pixel.
pub fn set_alpha_row(row: &mut [Argb32], alpha: u8) {
    for px in row {
        *px = px.with_alpha(alpha);
    }
}

/// Byte-reverse every pixel (ARGB ↔ BGRA).
pub fn reverse_row(row: &mut [Argb32]) {
    for px in row {
        *px = px.reverse();
    }
}

// ===========================================================================
// Public API — in-place, two operands
// ===========================================================================

fn zip_apply(dst: &mut [Argb32], src: &[Argb32], op: fn(u32, u32) -> u32) -> Result<(), SizeError> {
    check_pair(dst.len(), src.len())?;
    for (d, s) in dst.iter_mut().zip(src) {
        d.0 = op(d.0, s.0);
    }
    Ok(())
}

/// `dst[i] = dst[i] + src[i]`, saturating per channel.
pub fn add_row(dst: &mut [Argb32], src: &[Argb32]) -> Result<(), SizeError> {
    zip_apply(dst, src, packed::add)
}

/// `dst[i] = dst[i] - src[i]`, clamped at zero per channel.
pub fn sub_row(dst: &mut [Argb32], src: &[Argb32]) -> Result<(), SizeError> {
    zip_apply(dst, src, |d, s| packed::sub(s, d))
}

/// `dst[i] = dst[i] * src[i] / 255` per channel.
pub fn mul_row(dst: &mut [Argb32], src: &[Argb32]) -> Result<(), SizeError> {
    zip_apply(dst, src, packed::mul)
}

// ===========================================================================
// Public API — strided
// ===========================================================================

/// Replace the alpha channel of every pixel in a strided 4bpp image.
///
/// `stride` is the distance in bytes between the start of consecutive rows
/// and must be ≥ `width × 4`. Padding bytes between rows are never read or
/// written. The buffer must be at least `(height - 1) * stride + width * 4`
/// bytes. Pixels are native-endian words, as in [`pixels_mut`]; rows need not
/// be 4-byte aligned.
pub fn set_alpha_strided(
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
    alpha: u8,
) -> Result<(), SizeError> {
    check_strided(buf.len(), width, height, stride)?;
    for y in 0..height {
        let start = y * stride;
        let row = &mut buf[start..start + width * 4];
        for px in row.chunks_exact_mut(4) {
            let v = u32::from_ne_bytes([px[0], px[1], px[2], px[3]]);
            px.copy_from_slice(&packed::set_alpha(v, alpha.into()).to_ne_bytes());
        }
    }
    Ok(())
}
