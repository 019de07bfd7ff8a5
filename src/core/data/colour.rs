#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Builds a colour from unit-range channels, clamping each to `[0, 1]`
    /// and rounding to the nearest 8-bit level.
    #[must_use]
    pub fn from_unit_rgb(red: f64, green: f64, blue: f64) -> Self {
        Self {
            r: unit_to_byte(red),
            g: unit_to_byte(green),
            b: unit_to_byte(blue),
        }
    }
}

fn unit_to_byte(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
