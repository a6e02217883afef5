// File: crates/chart-core/src/scale.rs
// Summary: Linear scale transform (domain -> pixel range) and nice tick generation.

/// Data-space value (e.g., a year or a count).
pub type Value = f64;

/// Continuous linear map from a data domain onto a pixel range.
/// The range may be inverted (`range.0 > range.1`), which is how the Y axis
/// puts its domain minimum at the bottom of the plot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (Value, Value),
    pub range: (f32, f32),
}

impl LinearScale {
    pub fn new(domain: (Value, Value), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    /// Map a data value to pixels. A zero-width domain maps everything to the
    /// middle of the range.
    #[inline]
    pub fn to_px(&self, v: Value) -> f32 {
        let (d0, d1) = self.domain;
        let span = d1 - d0;
        let t = if span == 0.0 || !span.is_finite() { 0.5 } else { (v - d0) / span };
        self.range.0 + (t as f32) * (self.range.1 - self.range.0)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> Value {
        let (r0, r1) = self.range;
        let rspan = r1 - r0;
        if rspan == 0.0 {
            return self.domain.0;
        }
        let t = ((px - r0) / rspan) as f64;
        self.domain.0 + t * (self.domain.1 - self.domain.0)
    }

    /// Roughly `count` evenly spaced round values inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<Value> {
        ticks(self.domain.0, self.domain.1, count)
    }
}

// Thresholds for picking the 1/2/5/10 multiplier.
const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

#[inline]
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

/// Returns `(i1, i2, inc)`. A negative `inc` means the tick step is `1 / -inc`
/// (used for sub-unit steps to keep the multiples exact).
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
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

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inv = 10f64.powf(-power) / factor;
        i1 = round_half_up(start * inv);
        i2 = round_half_up(stop * inv);
        if i1 / inv < start { i1 += 1.0; }
        if i2 / inv > stop { i2 -= 1.0; }
        inc = -inv;
    } else {
        inc = 10f64.powf(power) * factor;
        i1 = round_half_up(start / inc);
        i2 = round_half_up(stop / inc);
        if i1 * inc < start { i1 += 1.0; }
        if i2 * inc > stop { i2 -= 1.0; }
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Nice tick values covering `[start, stop]` (either orientation).
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (i1, i2, inc) = if reverse {
        tick_spec(stop, start, count as f64)
    } else {
        tick_spec(start, stop, count as f64)
    };
    if !(i2 >= i1) {
        return Vec::new();
    }
    let n = (i2 - i1) as usize + 1;
    let at = |k: f64| if inc < 0.0 { k / -inc } else { k * inc };
    if reverse {
        (0..n).map(|i| at(i2 - i as f64)).collect()
    } else {
        (0..n).map(|i| at(i1 + i as f64)).collect()
    }
}

/// Step between the values produced by [`ticks`] for the same arguments.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    if start == stop || count == 0 {
        return 0.0;
    }
    let reverse = stop < start;
    let (_, _, inc) = if reverse {
        tick_spec(stop, start, count as f64)
    } else {
        tick_spec(start, stop, count as f64)
    };
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse { -step } else { step }
}
