use super::util::spread_prefix;
use super::Error;
use itertools::Itertools;
use std::convert::TryFrom;
use std::iter::FusedIterator;

/// Split counts must stay strictly below this.
pub const SPLIT_LIMIT: u64 = 1_000_000;

/// A validated number of intervals, `2 <= n < SPLIT_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitCount(u64);

impl SplitCount {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for SplitCount {
    type Error = Error;

    fn try_from(n: u64) -> Result<Self, Error> {
        if n <= 1 || n >= SPLIT_LIMIT {
            return Err(Error::SplitCountOutOfRange(n));
        }
        Ok(SplitCount(n))
    }
}

/// Boundary arithmetic needs a full 64 bits of unsigned integer.
pub fn check_platform() -> Result<(), Error> {
    let bits = u64::MAX.count_ones();
    if bits < 64 {
        return Err(Error::UnsupportedPlatform(bits));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub intervals: u64,
    pub base_step: u64,
    pub remainder: u64,
    /// Intervals that are one unit wider than `base_step`, the implicit last one included.
    pub wide: u64,
}

/// Iterator over the interior boundaries that divide `0..=u64::MAX` into `intervals` nearly
/// equal consecutive intervals.
///
/// Every interval is `base_step` wide, plus one unit for exactly `remainder` of them. The wider
/// intervals are picked by a wobble counter measured in `1/intervals` units: each interval adds
/// `remainder` to it, and whenever it reaches `intervals` the interval gets the extra unit. The
/// first interval therefore never gets one, and the final (implicit) one always does when
/// `remainder > 0`.
#[derive(Debug, Clone)]
pub struct Splits {
    intervals: u64,
    base_step: u64,
    remainder: u64,
    emitted: u64,
    wobble: u64,
    edge: u64,
}

impl Splits {
    pub fn new(count: SplitCount) -> Self {
        let intervals = count.get();
        Self {
            intervals,
            base_step: u64::MAX / intervals,
            remainder: u64::MAX % intervals,
            emitted: 0,
            wobble: 0,
            edge: 0,
        }
    }

    /// Check the platform and `n`, then start generating boundaries.
    pub fn generate(n: u64) -> Result<Self, Error> {
        check_platform()?;
        Ok(Self::new(SplitCount::try_from(n)?))
    }

    pub fn intervals(&self) -> u64 {
        self.intervals
    }

    pub fn base_step(&self) -> u64 {
        self.base_step
    }

    pub fn remainder(&self) -> u64 {
        self.remainder
    }

    /// Upper edge of interval `k`, for `k` in `1..=intervals`.
    pub fn boundary(&self, k: u64) -> u64 {
        k * self.base_step + spread_prefix(self.remainder, self.intervals, k)
    }

    /// Walk a fresh copy of the sequence and count gap widths.
    pub fn summary(&self) -> Summary {
        let fresh = Self {
            emitted: 0,
            wobble: 0,
            edge: 0,
            ..*self
        };
        let base_step = self.base_step;
        let wide = std::iter::once(0)
            .chain(fresh)
            .chain(std::iter::once(u64::MAX))
            .tuple_windows()
            .filter(|(lo, hi)| hi - lo > base_step)
            .count() as u64;

        Summary {
            intervals: self.intervals,
            base_step,
            remainder: self.remainder,
            wide,
        }
    }

    fn interior(&self) -> u64 {
        self.intervals - 1
    }
}

impl Iterator for Splits {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.emitted >= self.interior() {
            return None;
        }
        self.emitted += 1;

        self.wobble += self.remainder;
        let mut extra = 0;
        if self.wobble >= self.intervals {
            extra = 1;
            self.wobble -= self.intervals;
        }

        self.edge += self.base_step + extra;
        Some(self.edge)
    }

    fn nth(&mut self, n: usize) -> Option<u64> {
        let skip_to = self.emitted.saturating_add(n as u64).min(self.interior());
        if skip_to > self.emitted {
            self.emitted = skip_to;
            self.wobble = (skip_to * self.remainder) % self.intervals;
            self.edge = self.boundary(skip_to);
        }
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.interior() - self.emitted) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Splits {}

impl FusedIterator for Splits {}
