/// Linear colour with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    #[must_use]
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    #[must_use]
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            channel_to_u8(self.a),
        ]
    }
}

fn channel_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_sets_alpha() {
        assert_eq!(Rgba::opaque(0.1, 0.2, 0.3).a, 1.0);
    }

    #[test]
    fn test_to_rgba8_scales_and_clamps() {
        let colour = Rgba {
            r: 0.0,
            g: 0.5,
            b: 1.5,
            a: -1.0,
        };

        assert_eq!(colour.to_rgba8(), [0, 128, 255, 0]);
    }
}
