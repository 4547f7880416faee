//! Triangular fuzzy sets over a bounded numeric domain
//!
//! Each dimension (price, duration) is covered by three sets whose
//! breakpoints sit at the dataset bounds and at 30% / 70% of the range.
//! Inputs outside the bounds are clamped, so a value below the minimum
//! gets the same degrees as the minimum itself.

/// Lower split point as a fraction of the range
const LOWER_SPLIT: f64 = 0.3;
/// Upper split point as a fraction of the range
const UPPER_SPLIT: f64 = 0.7;

/// Tolerance used when comparing membership degrees
const DEGREE_EPSILON: f64 = 1e-9;

/// Triangular membership function defined by (left, peak, right)
///
/// `left == peak` makes a left shoulder and `peak == right` a right shoulder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangularSet {
    pub left: f64,
    pub peak: f64,
    pub right: f64,
}

impl TriangularSet {
    pub fn new(left: f64, peak: f64, right: f64) -> Self {
        debug_assert!(left <= peak && peak <= right);
        Self { left, peak, right }
    }

    /// Degree of membership of `x`, in [0, 1]
    pub fn degree(&self, x: f64) -> f64 {
        if x == self.peak {
            return 1.0;
        }
        if x < self.peak {
            if x <= self.left {
                return 0.0;
            }
            (x - self.left) / (self.peak - self.left)
        } else {
            if x >= self.right {
                return 0.0;
            }
            (self.right - x) / (self.right - self.peak)
        }
    }
}

/// Degrees of one input value against every set of a variable
#[derive(Debug, Clone, PartialEq)]
pub struct Memberships<L> {
    degrees: Vec<(L, f64)>,
}

impl<L: Copy + PartialEq> Memberships<L> {
    /// Degree for a single label, 0.0 if the label is unknown
    pub fn degree(&self, label: L) -> f64 {
        self.degrees
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, d)| *d)
            .unwrap_or(0.0)
    }

    /// Highest degree across all sets
    pub fn max_degree(&self) -> f64 {
        self.degrees.iter().map(|(_, d)| *d).fold(0.0, f64::max)
    }

    /// Every label attaining the highest degree
    pub fn winners(&self) -> Vec<L> {
        let max = self.max_degree();
        self.degrees
            .iter()
            .filter(|(_, d)| (max - d).abs() <= DEGREE_EPSILON)
            .map(|(l, _)| *l)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(L, f64)> {
        self.degrees.iter()
    }
}

/// A bounded numeric dimension covered by three labelled fuzzy sets
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyVariable<L> {
    min: f64,
    max: f64,
    sets: [(L, TriangularSet); 3],
}

impl<L: Copy + PartialEq> FuzzyVariable<L> {
    /// Builds the low / medium / high sets over `[min, max]`
    ///
    /// Low is a left shoulder peaking at `min`, High a right shoulder peaking
    /// at `max`, Medium peaks at the lower split point.
    pub fn from_bounds(min: f64, max: f64, labels: [L; 3]) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let span = max - min;
        let lower = min + span * LOWER_SPLIT;
        let upper = min + span * UPPER_SPLIT;
        let [low, medium, high] = labels;

        Self {
            min,
            max,
            sets: [
                (low, TriangularSet::new(min, min, lower)),
                (medium, TriangularSet::new(min, lower, upper)),
                (high, TriangularSet::new(lower, max, max)),
            ],
        }
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    pub fn set(&self, label: L) -> Option<&TriangularSet> {
        self.sets.iter().find(|(l, _)| *l == label).map(|(_, s)| s)
    }

    /// Degrees of `x` against every set, after clamping to the bounds
    pub fn memberships(&self, x: f64) -> Memberships<L> {
        let x = x.clamp(self.min, self.max);

        // Degenerate range: every set collapses onto the single value.
        let degrees = if self.max - self.min <= f64::EPSILON {
            self.sets.iter().map(|(l, _)| (*l, 1.0)).collect()
        } else {
            self.sets.iter().map(|(l, s)| (*l, s.degree(x))).collect()
        };

        Memberships { degrees }
    }
}
