// File: crates/chart-core/src/axis.rs
// Summary: Axis model with label, domain, and tick labelling.

use crate::error::ChartError;
use crate::scale::{tick_step, LinearScale};

/// How tick values are turned into label text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TickFormat {
    /// Fixed-point with precision derived from the tick step and thousands
    /// grouping (`0.5` step -> `"1.5"`, `1` step -> `"12,000"`).
    #[default]
    Fixed,
    /// Rounded integer, no grouping (`1905.0` -> `"1905"`). Suited to years.
    Integer,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub format: TickFormat,
    /// Hint for the number of ticks; actual count depends on nice rounding.
    pub tick_count: usize,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, format: TickFormat::Fixed, tick_count: 10 }
    }

    pub fn default_x() -> Self {
        Self::new("X", 0.0, 1.0)
    }

    pub fn default_y() -> Self {
        Self::new("Y", 0.0, 1.0)
    }

    pub fn with_format(mut self, format: TickFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_tick_count(mut self, count: usize) -> Self {
        self.tick_count = count;
        self
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        if self.min.is_finite() && self.max.is_finite() {
            Ok(())
        } else {
            Err(ChartError::NonFiniteDomain { label: self.label.clone(), min: self.min, max: self.max })
        }
    }

    /// Linear scale for this axis onto the given pixel range.
    pub fn scale(&self, range: (f32, f32)) -> LinearScale {
        LinearScale::new((self.min, self.max), range)
    }

    /// Tick positions (data space) paired with their label text. Integer axes
    /// keep only whole-number ticks so narrow domains don't repeat labels.
    pub fn ticks(&self) -> Vec<(f64, String)> {
        let scale = self.scale((0.0, 1.0));
        let step = tick_step(self.min, self.max, self.tick_count);
        scale
            .ticks(self.tick_count)
            .into_iter()
            .filter(|v| self.format != TickFormat::Integer || v.fract() == 0.0)
            .map(|v| (v, format_tick(v, step, self.format)))
            .collect()
    }
}

/// Format one tick value. `step` is the spacing between neighbouring ticks.
pub fn format_tick(value: f64, step: f64, format: TickFormat) -> String {
    match format {
        TickFormat::Integer => {
            let r = value.round();
            // avoid "-0"
            if r == 0.0 { "0".to_string() } else { format!("{}", r as i64) }
        }
        TickFormat::Fixed => {
            let precision = fixed_precision(step);
            let body = format!("{:.*}", precision, value.abs());
            let (int_part, frac_part) = match body.split_once('.') {
                Some((i, f)) => (i.to_string(), Some(f.to_string())),
                None => (body.clone(), None),
            };
            let negative = value < 0.0 && body.chars().any(|c| c.is_ascii_digit() && c != '0');
            let mut out = String::new();
            if negative {
                out.push('\u{2212}');
            }
            out.push_str(&group_thousands(&int_part));
            if let Some(f) = frac_part {
                out.push('.');
                out.push_str(&f);
            }
            out
        }
    }
}

/// Digits after the decimal point needed to tell ticks `step` apart.
fn fixed_precision(step: f64) -> usize {
    let step = step.abs();
    if step == 0.0 || !step.is_finite() {
        return 0;
    }
    let exponent = step.log10().floor() as i32;
    (-exponent).max(0) as usize
}

fn group_thousands(digits: &str) -> String {
    let n = digits.len();
    let mut out = String::with_capacity(n + n / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
