use std::ops::{Add, Mul, Sub};

// single precision to match what the shading programs evaluate
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub real: f32,
    pub imag: f32,
}

impl Complex {
    #[must_use]
    pub const fn new(real: f32, imag: f32) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f32 {
        self.real * self.real + self.imag * self.imag
    }

    /// (x² − y², 2xy)
    #[must_use]
    pub fn square(self) -> Self {
        Self {
            real: self.real * self.real - self.imag * self.imag,
            imag: 2.0 * self.real * self.imag,
        }
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

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            real: self.real - other.real,
            imag: self.imag - other.imag,
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
