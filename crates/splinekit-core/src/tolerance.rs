/// Tolerance management for parameter and knot comparisons.
///
/// Knot multiplicity and domain-boundary detection both hinge on deciding
/// whether two floating-point parameters are "the same knot". The rule is a
/// fixed absolute test first, falling back to a relative test against the
/// larger-magnitude operand.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Absolute tolerance for parameter comparisons
    pub absolute: f64,
    /// Relative tolerance, applied when the absolute test fails
    pub relative: f64,
}

impl Tolerance {
    pub const DEFAULT_ABSOLUTE: f64 = 1e-9;
    pub const DEFAULT_RELATIVE: f64 = 1e-9;

    pub fn new(absolute: f64, relative: f64) -> Self {
        Self { absolute, relative }
    }

    pub fn default_precision() -> Self {
        Self {
            absolute: Self::DEFAULT_ABSOLUTE,
            relative: Self::DEFAULT_RELATIVE,
        }
    }

    pub fn loose() -> Self {
        Self {
            absolute: 1e-5,
            relative: 1e-5,
        }
    }

    pub fn tight() -> Self {
        Self {
            absolute: 1e-12,
            relative: 1e-12,
        }
    }

    /// Check if two parameters are equal within tolerance.
    pub fn equals(self, x: f64, y: f64) -> bool {
        if (x - y).abs() < self.absolute {
            return true;
        }
        let r = if x.abs() > y.abs() {
            ((x - y) / x).abs()
        } else {
            ((x - y) / y).abs()
        };
        r <= self.relative
    }

    /// Check if a value is zero within absolute tolerance.
    pub fn is_zero(self, v: f64) -> bool {
        v.abs() < self.absolute
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
