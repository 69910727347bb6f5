use pathfinding::num_traits::Zero;
use std::cmp::Ordering;
use std::ops::Add;

/// Travel time in seconds, totally ordered so it can drive a search.
///
/// Ordering follows [`f64::total_cmp`]; costs are never negative or NaN
/// in practice, as every road speed is positive.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cost(pub f64);

impl Cost {
    #[inline]
    pub const fn seconds(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Cost {
    fn from(value: f64) -> Self {
        Cost(value)
    }
}

impl PartialEq for Cost {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Add<Cost> for Cost {
    type Output = Cost;

    fn add(self, rhs: Cost) -> Self::Output {
        Cost(self.0 + rhs.0)
    }
}

impl Zero for Cost {
    fn zero() -> Self {
        Cost(0.0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}
