use super::*;

// --- Reference (channel-by-channel) implementations for comparison ---

fn ref_channels(c1: u32, c2: u32, op: impl Fn(i32, i32) -> i32) -> u32 {
    let a = explode(c1);
    let b = explode(c2);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = op(a[i] as i32, b[i] as i32).clamp(0, 255) as u8;
    }
    u32::from_be_bytes(out)
}

fn ref_add(c1: u32, c2: u32) -> u32 {
    ref_channels(c1, c2, |x, y| x + y)
}

fn ref_sub(c1: u32, c2: u32) -> u32 {
    ref_channels(c1, c2, |x, y| y - x)
}

fn ref_mul(c1: u32, c2: u32) -> u32 {
    ref_channels(c1, c2, |x, y| x * y / 255)
}

/// Every (x, y) channel pair, placed in all four channels with different
/// neighbours so cross-channel leaks would show.
fn all_pairs() -> impl Iterator<Item = (u32, u32)> {
    (0..=255u32).flat_map(|x| {
        (0..=255u32).map(move |y| {
            let c1 = implode(x, 255 - x, x ^ 0x5A, y);
            let c2 = implode(y, y ^ 0xA5, 255 - y, x);
            (c1, c2)
        })
    })
}

/// Sparse walk over the whole u32 range.
fn sample_words() -> impl Iterator<Item = u32> {
    (0..=u32::MAX).step_by(65_521).chain([u32::MAX, 0x8000_0000, 0x7FFF_FFFF])
}

// -----------------------------------------------------------------------
// Explode / implode
// -----------------------------------------------------------------------

#[test]
fn explode_channels() {
    let cases: &[(u32, [u8; 4])] = &[
        (0xFF00_0000, [0xFF, 0, 0, 0]),
        (0x00FF_0000, [0, 0xFF, 0, 0]),
        (0x0000_FF00, [0, 0, 0xFF, 0]),
        (0x0000_00FF, [0, 0, 0, 0xFF]),
        (0x8C5F_77AD, [0x8C, 0x5F, 0x77, 0xAD]),
        (0, [0, 0, 0, 0]),
    ];
    for &(color, expected) in cases {
        assert_eq!(explode(color), expected, "explode {color:#010x}");
    }
}

#[test]
fn explode_high_bit_does_not_sign_extend() {
    // Same bits as the i32 -0x73A08853.
    let color = (-0x73A0_8853i32) as u32;
    assert_eq!(explode(color), [0x8C, 0x5F, 0x77, 0xAD]);
    assert_eq!(alpha(0x8000_0000), 0x80);
}

#[test]
fn implode_values() {
    assert_eq!(implode(0xFF, 0xFF, 0xFF, 0xFF), 0xFFFF_FFFF);
    assert_eq!(implode(0, 0, 0, 0), 0);
    assert_eq!(implode(0x8C, 0x5F, 0x77, 0xAD), 0x8C5F_77AD);
}

#[test]
fn implode_masks_out_of_range_channels() {
    assert_eq!(implode(0x1FF, 0, 0, 0), implode(0xFF, 0, 0, 0));
    assert_eq!(implode(0, 0x1FF, 0, 0), 0x00FF_0000);
    assert_eq!(implode(0, 0, 0x300, 0x1AD), 0x0000_00AD);
    assert_eq!(implode(u32::MAX, u32::MAX, u32::MAX, u32::MAX), 0xFFFF_FFFF);
}

#[test]
fn explode_implode_round_trip() {
    for c in sample_words() {
        let [a, r, g, b] = explode(c);
        assert_eq!(implode(a.into(), r.into(), g.into(), b.into()), c, "{c:#010x}");
    }
}

// -----------------------------------------------------------------------
// Reverse / set_alpha
// -----------------------------------------------------------------------

#[test]
fn reverse_values() {
    let cases: &[(u32, u32)] = &[
        (0, 0),
        (0xFF00_0000, 0x0000_00FF),
        (0x00FF_0000, 0x0000_FF00),
        (0x0000_FF00, 0x00FF_0000),
        (0x0000_00FF, 0xFF00_0000),
        (0x8C5F_77AD, 0xAD77_5F8C),
    ];
    for &(color, expected) in cases {
        assert_eq!(reverse(color), expected, "reverse {color:#010x}");
    }
}

#[test]
fn reverse_is_involution() {
    for c in sample_words() {
        assert_eq!(reverse(reverse(c)), c);
    }
}

#[test]
fn set_alpha_values() {
    assert_eq!(set_alpha(0, 0), 0);
    assert_eq!(set_alpha(0, 0xFF), 0xFF00_0000);
    assert_eq!(set_alpha(0x8C5F_77AD, 0xCC), 0xCC5F_77AD);
    assert_eq!(set_alpha(0x8C5F_77AD, 0x1CC), 0xCC5F_77AD);
}

#[test]
fn set_alpha_matches_implode() {
    for c in sample_words() {
        let [_, r, g, b] = explode(c);
        for alpha in [0u32, 0x7F, 0x80, 0xFF, 0x1234] {
            assert_eq!(
                set_alpha(c, alpha),
                implode(alpha, r.into(), g.into(), b.into()),
                "{c:#010x} alpha={alpha:#x}"
            );
        }
    }
}

// -----------------------------------------------------------------------
// Arithmetic
// -----------------------------------------------------------------------

#[test]
fn add_values() {
    assert_eq!(add(0, 0), 0);
    assert_eq!(add(0xFFFF_FFFF, 0xFFFF_FFFF), 0xFFFF_FFFF);
    assert_eq!(add(0x8C5F_77AD, 0xCC37_5D5F), 0xFF96_D4FF);
    assert_eq!(add(0xCC37_5D5F, 0x8C5F_77AD), 0xFF96_D4FF);
}

#[test]
fn add_does_not_carry_into_neighbour() {
    // Plain u32 addition would give 0x0001_0000.
    assert_eq!(add(0x0000_FF00, 0x0000_0100), 0x0000_FF00);
    assert_eq!(add(0x00FF_FFFF, 0x0001_0101), 0x00FF_FFFF);
    assert_eq!(add(0xFF00_0000, 0x0100_0000), 0xFF00_0000);
}

#[test]
fn add_matches_reference_exhaustive() {
    for (c1, c2) in all_pairs() {
        assert_eq!(add(c1, c2), ref_add(c1, c2), "add {c1:#010x} {c2:#010x}");
        assert_eq!(add(c1, c2), add(c2, c1));
    }
}

#[test]
fn sub_values() {
    assert_eq!(sub(0, 0), 0);
    assert_eq!(sub(0xFFFF_FFFF, 0xFFFF_FFFF), 0);
    assert_eq!(sub(0x8C5F_77AD, 0xCC37_5D5F), 0x4000_0000);
    assert_eq!(sub(0xCC37_5D5F, 0x8C5F_77AD), 0x0028_1A4E);
}

#[test]
fn sub_does_not_borrow_from_neighbour() {
    // Taking 1 from a zero blue channel must not touch green.
    assert_eq!(sub(0x0000_0001, 0x0000_0100), 0x0000_0100);
    assert_eq!(sub(0x0101_0101, 0x0100_0000), 0);
    assert_eq!(sub(0x0000_0000, 0x8000_0080), 0x8000_0080);
}

#[test]
fn sub_matches_reference_exhaustive() {
    for (c1, c2) in all_pairs() {
        assert_eq!(sub(c1, c2), ref_sub(c1, c2), "sub {c1:#010x} {c2:#010x}");
    }
}

#[test]
fn mul_values() {
    assert_eq!(mul(0, 0), 0);
    assert_eq!(mul(0xFFFF_FFFF, 0xFFFF_FFFF), 0xFFFF_FFFF);
    assert_eq!(mul(0x8C5F_77AD, 0xCC37_5D5F), 0x7014_2B40);
    assert_eq!(mul(0xCC37_5D5F, 0x8C5F_77AD), 0x7014_2B40);
}

#[test]
fn mul_identity_and_zero() {
    for c in sample_words() {
        assert_eq!(mul(c, 0xFFFF_FFFF), c);
        assert_eq!(mul(c, 0), 0);
    }
}

#[test]
fn mul_matches_reference_exhaustive() {
    for (c1, c2) in all_pairs() {
        assert_eq!(mul(c1, c2), ref_mul(c1, c2), "mul {c1:#010x} {c2:#010x}");
        assert_eq!(mul(c1, c2), mul(c2, c1));
    }
}

#[test]
fn usable_in_const_context() {
    const OPAQUE_GRAY: u32 = set_alpha(implode(0, 0x80, 0x80, 0x80), 0xFF);
    const DOUBLED: u32 = add(OPAQUE_GRAY, OPAQUE_GRAY);
    assert_eq!(OPAQUE_GRAY, 0xFF80_8080);
    assert_eq!(DOUBLED, 0xFFFF_FFFF);
}
