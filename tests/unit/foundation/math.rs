use super::*;

#[test]
fn mul_div255_variants_align() {
    for x in [0u16, 1, 127, 255] {
        for y in [0u16, 1, 127, 255] {
            assert_eq!(u16::from(mul_div255_u8(x, y)), mul_div255_u16(x, y));
        }
    }
}

#[test]
fn lerp_endpoints_are_exact() {
    for (a, b) in [(0u8, 255u8), (99, 6), (241, 212), (17, 17)] {
        assert_eq!(lerp_u8(a, b, 0), a);
        assert_eq!(lerp_u8(a, b, 255), b);
    }
    assert_eq!(lerp_u8(0, 255, 128), 128);
}

#[test]
fn over_opaque_source_replaces_destination() {
    assert_eq!(over_u8(10, 200, 255), 200);
    assert_eq!(over_u8(10, 0, 0), 10);
}
