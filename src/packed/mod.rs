//! Packed ARGB32 arithmetic on raw `u32` words.
//!
//! Layout: alpha in bits 31–24, red 23–16, green 15–8, blue 7–0. All shifts
//! are logical. Add/sub split the word into two halves of 16-bit lanes
//! (red+blue, alpha+green) so each channel has a spare bit for its carry
//! or borrow; mul goes channel by channel.
//!
//! ```rust
//! use argb32::packed;
//!
//! assert_eq!(packed::set_alpha(0x8C5F_77AD, 0xCC), 0xCC5F_77AD);
//! assert_eq!(packed::reverse(0x8C5F_77AD), 0xAD77_5F8C);
//! ```

#[cfg(test)]
mod tests;

/// Low byte of each 16-bit lane: the red and blue channels.
const LANES: u32 = 0x00FF_00FF;

/// Bit 8 of each 16-bit lane: where a lane's carry or borrow shows up.
const LANE_CARRY: u32 = 0x0100_0100;

const RGB_MASK: u32 = 0x00FF_FFFF;

// ===========================================================================
// Channel access
// ===========================================================================

/// Alpha channel (bits 31–24).
#[inline(always)]
pub const fn alpha(color: u32) -> u8 {
    ((color >> 24) & 0xFF) as u8
}

/// Red channel (bits 23–16).
#[inline(always)]
pub const fn red(color: u32) -> u8 {
    ((color >> 16) & 0xFF) as u8
}

/// Green channel (bits 15–8).
#[inline(always)]
pub const fn green(color: u32) -> u8 {
    ((color >> 8) & 0xFF) as u8
}

/// Blue channel (bits 7–0).
#[inline(always)]
pub const fn blue(color: u32) -> u8 {
    (color & 0xFF) as u8
}

/// Split a packed color into `[a, r, g, b]`.
///
/// ```rust
/// assert_eq!(argb32::packed::explode(0x8C5F_77AD), [0x8C, 0x5F, 0x77, 0xAD]);
/// ```
#[inline]
pub const fn explode(color: u32) -> [u8; 4] {
    [alpha(color), red(color), green(color), blue(color)]
}

/// Pack four channels into one word.
///
/// Only the low 8 bits of each argument are kept, so `0x1FF` packs the same
/// as `0xFF`.
///
/// ```rust
/// assert_eq!(argb32::packed::implode(0x8C, 0x5F, 0x77, 0xAD), 0x8C5F_77AD);
/// assert_eq!(argb32::packed::implode(0x1FF, 0, 0, 0), 0xFF00_0000);
/// ```
#[inline]
pub const fn implode(a: u32, r: u32, g: u32, b: u32) -> u32 {
    ((a & 0xFF) << 24) | ((r & 0xFF) << 16) | ((g & 0xFF) << 8) | (b & 0xFF)
}

// ===========================================================================
// Layout transforms
// ===========================================================================

/// Byte-reverse the word: ARGB ↔ BGRA. Its own inverse.
#[inline]
pub const fn reverse(color: u32) -> u32 {
    color.swap_bytes()
}

/// Replace the alpha channel with the low 8 bits of `alpha`.
#[inline]
pub const fn set_alpha(color: u32, alpha: u32) -> u32 {
    (color & RGB_MASK) | ((alpha & 0xFF) << 24)
}

// ===========================================================================
// Saturating arithmetic
// ===========================================================================

/// Per-lane sums are at most 0x1FE; turn any lane with bit 8 set into 0xFF.
#[inline(always)]
const fn saturate_lanes(sum: u32) -> u32 {
    let carry = (sum & LANE_CARRY) >> 8;
    (sum | carry * 0xFF) & LANES
}

/// Lanes hold `0x100 + x - y`; bit 8 is clear exactly when `y > x`.
#[inline(always)]
const fn clamp_lanes(diff: u32) -> u32 {
    let keep = ((diff & LANE_CARRY) >> 8) * 0xFF;
    diff & keep
}

/// Per-channel saturating addition. Each channel is `min(c1 + c2, 255)`.
///
/// ```rust
/// use argb32::packed::add;
///
/// assert_eq!(add(0x8C5F_77AD, 0xCC37_5D5F), 0xFF96_D4FF);
/// assert_eq!(add(0xFFFF_FFFF, 0xFFFF_FFFF), 0xFFFF_FFFF);
/// ```
#[inline]
pub const fn add(color1: u32, color2: u32) -> u32 {
    let rb = saturate_lanes((color1 & LANES) + (color2 & LANES));
    let ag = saturate_lanes(((color1 >> 8) & LANES) + ((color2 >> 8) & LANES));
    rb | (ag << 8)
}

/// Per-channel saturating difference: each channel is
/// `max(c2 - c1, 0)`, i.e. `color1` is taken away from `color2`.
///
/// ```rust
/// use argb32::packed::sub;
///
/// assert_eq!(sub(0x8C5F_77AD, 0xCC37_5D5F), 0x4000_0000);
/// assert_eq!(sub(0xCC37_5D5F, 0x8C5F_77AD), 0x0028_1A4E);
/// ```
#[inline]
pub const fn sub(color1: u32, color2: u32) -> u32 {
    let rb = clamp_lanes(((color2 & LANES) | LANE_CARRY) - (color1 & LANES));
    let ag = clamp_lanes((((color2 >> 8) & LANES) | LANE_CARRY) - ((color1 >> 8) & LANES));
    rb | (ag << 8)
}

#[inline(always)]
const fn mul_channel(x: u32, y: u32) -> u32 {
    (x & 0xFF) * (y & 0xFF) / 255
}

/// Per-channel multiply blend: each channel is `c1 * c2 / 255`, truncated.
///
/// ```rust
/// use argb32::packed::mul;
///
/// assert_eq!(mul(0x8C5F_77AD, 0xCC37_5D5F), 0x7014_2B40);
/// assert_eq!(mul(0xFFFF_FFFF, 0x1234_5678), 0x1234_5678);
/// ```
#[inline]
pub const fn mul(color1: u32, color2: u32) -> u32 {
    implode(
        mul_channel(color1 >> 24, color2 >> 24),
        mul_channel(color1 >> 16, color2 >> 16),
        mul_channel(color1 >> 8, color2 >> 8),
        mul_channel(color1, color2),
    )
}
