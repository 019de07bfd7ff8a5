use std::ops::{Add, Mul};

/// Squared magnitude beyond which an orbit is known to diverge.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    /// One step of the Mandelbrot recurrence, `z² + c`.
    #[must_use]
    #[inline]
    pub fn step(self, c: Complex) -> Self {
        self * self + c
    }

    #[must_use]
    #[inline]
    pub fn has_escaped(&self) -> bool {
        self.magnitude_squared() > ESCAPE_RADIUS_SQUARED
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}
