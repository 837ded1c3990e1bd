//! Domain → pixel mappings used by every chart.
//!
//! `LinearScale` for numeric axes, `BandScale` for categorical bars and
//! `PointScale` for evenly spaced categorical positions (the PCP axes).

/// Common interface of all scales: map a domain value into range space.
pub trait Scale {
    type Value: Clone;

    /// Pixel position of `value`, `None` when the value is outside a discrete
    /// domain or not a number.
    fn apply(&self, value: &Self::Value) -> Option<f64>;

    /// Output range as `(start, end)`.
    fn range(&self) -> (f64, f64);

    /// Values at which an axis should draw ticks.
    fn ticks(&self, count: usize) -> Vec<Self::Value>;

    /// Offset from `apply` to the tick position (center of a band).
    fn tick_offset(&self) -> f64 {
        0.0
    }
}

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Tick spacing on the 1/2/5 × 10ⁿ progression.
///
/// A positive result is the step itself; a negative result `-k` stands for a
/// step of `1/k`, which keeps fractional ticks exact.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / factor
    }
}

/// Roughly `count` round values spanning `[start, stop]` (inclusive).
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let inc = tick_increment(lo, hi, count);
    if inc == 0.0 {
        return Vec::new();
    }
    let mut out: Vec<f64> = if inc > 0.0 {
        let i0 = (lo / inc).ceil() as i64;
        let i1 = (hi / inc).floor() as i64;
        (i0..=i1).take(10_000).map(|i| i as f64 * inc).collect()
    } else {
        let inv = -inc;
        let i0 = (lo * inv).ceil() as i64;
        let i1 = (hi * inv).floor() as i64;
        (i0..=i1).take(10_000).map(|i| i as f64 / inv).collect()
    };
    if reverse {
        out.reverse();
    }
    out
}

/// Continuous linear mapping from `domain` to `range`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Map a domain value into range space. A zero-width domain maps everything
    /// to the middle of the range.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (x - d0) / denom * (r1 - r0)
    }

    /// Inverse of [`LinearScale::map`].
    pub fn invert(&self, y: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = r1 - r0;
        if denom == 0.0 {
            return (d0 + d1) / 2.0;
        }
        d0 + (y - r0) / denom * (d1 - d0)
    }

    /// Inclusive domain membership; NaN is never contained.
    pub fn contains(&self, x: f64) -> bool {
        let (d0, d1) = self.domain;
        let (lo, hi) = if d0 <= d1 { (d0, d1) } else { (d1, d0) };
        x >= lo && x <= hi
    }

    /// Extend the domain outwards to multiples of the tick step for `count` ticks.
    pub fn nice(mut self, count: usize) -> Self {
        let (d0, d1) = self.domain;
        if !d0.is_finite() || !d1.is_finite() || d0 == d1 {
            return self;
        }
        let reversed = d1 < d0;
        let (mut start, mut stop) = if reversed { (d1, d0) } else { (d0, d1) };
        let mut prev: Option<f64> = None;
        for _ in 0..10 {
            let step = tick_increment(start, stop, count);
            if prev == Some(step) {
                break;
            }
            if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            prev = Some(step);
        }
        self.domain = if reversed { (stop, start) } else { (start, stop) };
        self
    }
}

impl Scale for LinearScale {
    type Value = f64;

    fn apply(&self, value: &f64) -> Option<f64> {
        value.is_finite().then(|| self.map(*value))
    }

    fn range(&self) -> (f64, f64) {
        self.range
    }

    fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }
}

/// Categorical scale dividing the range into equal bands, one per domain entry.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale<K> {
    domain: Vec<K>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
    align: f64,
}

impl<K: Clone + PartialEq> BandScale<K> {
    pub fn new(domain: Vec<K>, range: (f64, f64)) -> Self {
        Self {
            domain,
            range,
            padding_inner: 0.0,
            padding_outer: 0.0,
            align: 0.5,
        }
    }

    /// Same padding between bands and at both ends, in step units.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding_inner = padding.clamp(0.0, 1.0);
        self.padding_outer = padding.max(0.0);
        self
    }

    pub fn domain(&self) -> &[K] {
        &self.domain
    }

    /// Distance between the starts of adjacent bands.
    pub fn step(&self) -> f64 {
        let n = self.domain.len() as f64;
        let (r0, r1) = self.range;
        (r1 - r0) / (n - self.padding_inner + self.padding_outer * 2.0).max(1.0)
    }

    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }

    fn start(&self) -> f64 {
        let n = self.domain.len() as f64;
        let (r0, r1) = self.range;
        r0 + (r1 - r0 - self.step() * (n - self.padding_inner)) * self.align
    }
}

impl<K: Clone + PartialEq> Scale for BandScale<K> {
    type Value = K;

    fn apply(&self, value: &K) -> Option<f64> {
        let idx = self.domain.iter().position(|k| k == value)?;
        Some(self.start() + self.step() * idx as f64)
    }

    fn range(&self) -> (f64, f64) {
        self.range
    }

    fn ticks(&self, _count: usize) -> Vec<K> {
        self.domain.clone()
    }

    fn tick_offset(&self) -> f64 {
        self.bandwidth() / 2.0
    }
}

/// Categorical scale placing each domain entry at an evenly spaced point.
#[derive(Debug, Clone, PartialEq)]
pub struct PointScale<K>(BandScale<K>);

impl<K: Clone + PartialEq> PointScale<K> {
    /// `padding` is the outer gap in steps at each end of the range.
    pub fn new(domain: Vec<K>, range: (f64, f64), padding: f64) -> Self {
        let mut band = BandScale::new(domain, range);
        band.padding_inner = 1.0;
        band.padding_outer = padding.max(0.0);
        Self(band)
    }

    pub fn step(&self) -> f64 {
        self.0.step()
    }
}

impl<K: Clone + PartialEq> Scale for PointScale<K> {
    type Value = K;

    fn apply(&self, value: &K) -> Option<f64> {
        self.0.apply(value)
    }

    fn range(&self) -> (f64, f64) {
        self.0.range
    }

    fn ticks(&self, _count: usize) -> Vec<K> {
        self.0.domain.clone()
    }
}
