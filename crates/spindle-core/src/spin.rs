//! The spin domain type.

use std::fmt;
use std::iter::Sum;

/// A single Ising spin, either `+1` ([`Spin::Up`]) or `-1` ([`Spin::Down`]).
///
/// The two-variant enum makes the ±1 domain invariant unrepresentable:
/// there is no way to hold an out-of-domain spin, so configurations need
/// no per-element validation.
///
/// # Examples
///
/// ```
/// use spindle_core::Spin;
///
/// assert_eq!(Spin::Up.value(), 1);
/// assert_eq!(Spin::Down.value(), -1);
/// assert_eq!(Spin::Up.flipped(), Spin::Down);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Spin {
    /// Spin `+1`.
    Up,
    /// Spin `-1`.
    Down,
}

impl Spin {
    /// The numeric spin value, `+1` or `-1`.
    pub const fn value(self) -> i32 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }

    /// The opposite spin.
    pub const fn flipped(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Convert a numeric value into a spin.
    ///
    /// Returns `None` unless `v` is exactly `+1` or `-1`.
    pub fn from_value(v: i32) -> Option<Self> {
        match v {
            1 => Some(Self::Up),
            -1 => Some(Self::Down),
            _ => None,
        }
    }
}

impl fmt::Display for Spin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl Sum<Spin> for i64 {
    fn sum<I: Iterator<Item = Spin>>(iter: I) -> i64 {
        iter.map(|s| i64::from(s.value())).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_roundtrip() {
        for s in [Spin::Up, Spin::Down] {
            assert_eq!(Spin::from_value(s.value()), Some(s));
        }
        assert_eq!(Spin::from_value(0), None);
        assert_eq!(Spin::from_value(2), None);
    }

    #[test]
    fn flip_is_involutive() {
        assert_eq!(Spin::Up.flipped().flipped(), Spin::Up);
        assert_eq!(Spin::Down.flipped().flipped(), Spin::Down);
    }

    #[test]
    fn spins_sum_to_i64() {
        let total: i64 = [Spin::Up, Spin::Up, Spin::Down].into_iter().sum();
        assert_eq!(total, 1);
    }
}
