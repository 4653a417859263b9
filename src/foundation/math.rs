pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Weighted blend of two channels with an 8-bit weight; `w = 0` yields `a`, `w = 255` yields `b`.
pub(crate) fn lerp_u8(a: u8, b: u8, w: u8) -> u8 {
    let w = u16::from(w);
    let av = mul_div255_u16(u16::from(a), 255 - w);
    let bv = mul_div255_u16(u16::from(b), w);
    (av + bv).min(255) as u8
}

/// Premultiplied source-over of one channel onto an opaque destination channel.
pub(crate) fn over_u8(dst: u8, src_premul: u8, src_alpha: u8) -> u8 {
    let dc = mul_div255_u8(u16::from(dst), 255 - u16::from(src_alpha));
    src_premul.saturating_add(dc)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
