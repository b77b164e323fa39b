use crate::algebra::Vec3;

/// Clip a light-space color to the displayable [0, 1] range.
///
/// Hard clip: every channel above 1.0 lands on full brightness, so strong
/// highlights flatten instead of rolling off.
pub fn clamp(c: Vec3) -> Vec3 {
    Vec3(
        c.0.clamp(0.0, 1.0),
        c.1.clamp(0.0, 1.0),
        c.2.clamp(0.0, 1.0),
    )
}

/// Clip first, then spread the [0, 1] range over the 8-bit channels.
pub fn to_rgb8(c: Vec3) -> [u8; 3] {
    let c = clamp(c);
    [
        (c.0 * 255.0) as u8,
        (c.1 * 255.0) as u8,
        (c.2 * 255.0) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_before_scaling() {
        // Overbright, negative and mid-range channels in one color.
        assert_eq!(to_rgb8(Vec3(2.0, -0.5, 0.5)), [255, 0, 127]);
    }

    #[test]
    fn unit_range_passes_through() {
        assert_eq!(to_rgb8(Vec3(0.0, 1.0, 0.25)), [0, 255, 63]);
    }
}
