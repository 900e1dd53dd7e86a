//! Physical coupling parameters.

use std::fmt;

/// Dimensionless physical parameters of one ensemble.
///
/// Both couplings are divided by `k_B T`, so temperature enters the
/// simulation only through these two numbers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parameters {
    /// Nearest-neighbour coupling `J / (k_B T)`.
    pub jt: f64,
    /// External field `h / (k_B T)`.
    pub ht: f64,
}

impl fmt::Display for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "J/kT = {}, h/kT = {}", self.jt, self.ht)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_worked() {
        let p = Parameters { jt: 0.5, ht: -0.25 };
        assert_eq!(p.to_string(), "J/kT = 0.5, h/kT = -0.25");
    }
}
