use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};

use crate::packed;

/// A packed ARGB color: alpha in the top byte, blue in the bottom byte.
///
/// `#[repr(transparent)]` over `u32`, so `&[u32]` and suitably aligned
/// `&[u8]` buffers can be viewed as `&[Argb32]` with [`bytemuck`].
///
/// ```rust
/// use argb32::Argb32;
///
/// let c = Argb32(0x8C5F_77AD);
/// assert_eq!(c.explode(), [0x8C, 0x5F, 0x77, 0xAD]);
/// assert_eq!(c + Argb32(0xCC37_5D5F), Argb32(0xFF96_D4FF));
/// assert_eq!(Argb32(0xCC37_5D5F) - c, Argb32(0x4000_0000));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[repr(transparent)]
pub struct Argb32(pub u32);

impl Argb32 {
    pub const TRANSPARENT: Argb32 = Argb32(0);
    pub const BLACK: Argb32 = Argb32(0xFF00_0000);
    pub const WHITE: Argb32 = Argb32(0xFFFF_FFFF);

    #[inline]
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(u32::from_be_bytes([a, r, g, b]))
    }

    /// Build from wide channel values, keeping the low 8 bits of each.
    #[inline]
    pub const fn from_channels(a: u32, r: u32, g: u32, b: u32) -> Self {
        Self(packed::implode(a, r, g, b))
    }

    /// Reinterpret a signed word, as stored by APIs that keep colors in `i32`.
    #[inline]
    pub const fn from_i32(color: i32) -> Self {
        Self(color as u32)
    }

    #[inline]
    pub const fn to_i32(self) -> i32 {
        self.0 as i32
    }

    /// From bytes in memory order `[a, r, g, b]`.
    #[inline]
    pub const fn from_argb_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(bytes))
    }

    /// From bytes in memory order `[b, g, r, a]`.
    #[inline]
    pub const fn from_bgra_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_le_bytes(bytes))
    }

    #[inline]
    pub const fn to_argb_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    #[inline]
    pub const fn to_bgra_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    #[inline]
    pub const fn a(self) -> u8 {
        packed::alpha(self.0)
    }

    #[inline]
    pub const fn r(self) -> u8 {
        packed::red(self.0)
    }

    #[inline]
    pub const fn g(self) -> u8 {
        packed::green(self.0)
    }

    #[inline]
    pub const fn b(self) -> u8 {
        packed::blue(self.0)
    }

    /// `[a, r, g, b]`
    #[inline]
    pub const fn explode(self) -> [u8; 4] {
        packed::explode(self.0)
    }

    /// Byte-swapped word; an ARGB color read as BGRA and vice versa.
    #[inline]
    pub const fn reverse(self) -> Self {
        Self(packed::reverse(self.0))
    }

    #[inline]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self(packed::set_alpha(self.0, alpha as u32))
    }

    #[inline]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(packed::add(self.0, rhs.0))
    }

    /// Per channel `self - rhs`, clamped at zero.
    #[inline]
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self(packed::sub(rhs.0, self.0))
    }

    /// Multiply blend, `self * rhs / 255` per channel.
    #[inline]
    pub const fn multiply(self, rhs: Self) -> Self {
        Self(packed::mul(self.0, rhs.0))
    }
}

impl Add for Argb32 {
    type Output = Argb32;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }
}

impl AddAssign for Argb32 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = self.saturating_add(rhs);
    }
}

impl Sub for Argb32 {
    type Output = Argb32;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.saturating_sub(rhs)
    }
}

impl SubAssign for Argb32 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.saturating_sub(rhs);
    }
}

impl Mul for Argb32 {
    type Output = Argb32;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs)
    }
}

impl MulAssign for Argb32 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(rhs);
    }
}

impl From<u32> for Argb32 {
    #[inline]
    fn from(color: u32) -> Self {
        Self(color)
    }
}

impl From<Argb32> for u32 {
    #[inline]
    fn from(color: Argb32) -> Self {
        color.0
    }
}

/// `[a, r, g, b]`
impl From<[u8; 4]> for Argb32 {
    #[inline]
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_argb_bytes(bytes)
    }
}

impl fmt::Debug for Argb32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Argb32({:#010X})", self.0)
    }
}

/// `#AARRGGBB`
impl fmt::Display for Argb32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl fmt::LowerHex for Argb32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for Argb32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}
