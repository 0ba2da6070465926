use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Continuous scale mapping a numeric domain onto a scene-unit range.
///
/// Deserialization funnels through [`LinearScale::new`], so persisted
/// scales meet the same invariants as programmatic ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LinearScaleRepr")]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

#[derive(Deserialize)]
struct LinearScaleRepr {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl TryFrom<LinearScaleRepr> for LinearScale {
    type Error = ChartError;

    fn try_from(repr: LinearScaleRepr) -> ChartResult<Self> {
        Self::new((repr.domain_start, repr.domain_end), (repr.range_start, repr.range_end))
    }
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() || domain.0 == domain.1 {
            return Err(ChartError::InvalidData(
                "linear scale domain must be finite and non-degenerate".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData("linear scale range must be finite".to_owned()));
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a domain value onto the range. Values outside the domain
    /// extrapolate linearly, they are not clamped.
    pub fn map(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    /// Maps a range position back onto the domain.
    pub fn invert(self, position: f64) -> ChartResult<f64> {
        if !position.is_finite() {
            return Err(ChartError::InvalidData("position must be finite".to_owned()));
        }
        if self.range_start == self.range_end {
            return Err(ChartError::InvalidData("cannot invert a collapsed range".to_owned()));
        }

        let normalized = (position - self.range_start) / (self.range_end - self.range_start);
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }

    /// Round tick values covering the domain, roughly `count` of them.
    ///
    /// Steps are powers of ten times 1, 2 or 5, matching the d3 tick
    /// sequence so axis labels land where chart readers expect them.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        tick_values(self.domain_start, self.domain_end, count)
    }

    /// Returns a copy whose domain is widened to round tick boundaries.
    #[must_use]
    pub fn nice(self, count: usize) -> Self {
        if count == 0 {
            return self;
        }

        let mut start = self.domain_start;
        let mut stop = self.domain_end;
        let reverse = stop < start;
        if reverse {
            std::mem::swap(&mut start, &mut stop);
        }

        // Widening can change the tick increment, so refine until the
        // increment settles. Ten rounds always suffice for f64 domains.
        let mut prestep = 0.0f64;
        for _ in 0..10 {
            let step = tick_increment(start, stop, count as f64);
            if step == prestep || step == 0.0 || !step.is_finite() {
                break;
            }
            if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            }
            prestep = step;
        }

        if reverse {
            std::mem::swap(&mut start, &mut stop);
        }
        Self {
            domain_start: start,
            domain_end: stop,
            ..self
        }
    }
}

/// Categorical scale assigning each key an equal-width padded band.
///
/// Band geometry follows the d3 band model: `step` is the distance
/// between band starts, `band_width` is `step` minus inner padding, and
/// outer padding insets the first and last band from the range edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BandScaleRepr")]
pub struct BandScale {
    domain: Vec<String>,
    range_start: f64,
    range_end: f64,
    padding: f64,
    round: bool,
}

#[derive(Deserialize)]
struct BandScaleRepr {
    domain: Vec<String>,
    range_start: f64,
    range_end: f64,
    #[serde(default)]
    padding: f64,
    #[serde(default)]
    round: bool,
}

impl TryFrom<BandScaleRepr> for BandScale {
    type Error = ChartError;

    fn try_from(repr: BandScaleRepr) -> ChartResult<Self> {
        Ok(BandScale::new(repr.domain, (repr.range_start, repr.range_end))?
            .with_padding(repr.padding)?
            .with_round(repr.round))
    }
}

impl BandScale {
    pub fn new(domain: Vec<String>, range: (f64, f64)) -> ChartResult<Self> {
        if domain.is_empty() {
            return Err(ChartError::InvalidData("band scale domain must not be empty".to_owned()));
        }
        for (index, key) in domain.iter().enumerate() {
            if domain[..index].contains(key) {
                return Err(ChartError::InvalidData(format!(
                    "band scale domain has duplicate key \"{key}\""
                )));
            }
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData("band scale range must be finite".to_owned()));
        }

        Ok(Self {
            domain,
            range_start: range.0,
            range_end: range.1,
            padding: 0.0,
            round: false,
        })
    }

    /// Sets inner and outer padding as a fraction of the band step.
    pub fn with_padding(mut self, padding: f64) -> ChartResult<Self> {
        if !padding.is_finite() || !(0.0..1.0).contains(&padding) {
            return Err(ChartError::InvalidData("band padding must be in [0, 1)".to_owned()));
        }
        self.padding = padding;
        Ok(self)
    }

    /// Rounds band starts and widths to whole scene units.
    #[must_use]
    pub fn with_round(mut self, round: bool) -> Self {
        self.round = round;
        self
    }

    #[must_use]
    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Distance between the starts of adjacent bands.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.layout().step
    }

    /// Width of one band.
    #[must_use]
    pub fn band_width(&self) -> f64 {
        self.layout().band_width
    }

    /// Range position of the start of the band for `key`.
    pub fn position(&self, key: &str) -> ChartResult<f64> {
        let index = self
            .domain
            .iter()
            .position(|candidate| candidate == key)
            .ok_or_else(|| ChartError::UnknownKey(key.to_owned()))?;
        Ok(self.layout().slot(index, self.domain.len()))
    }

    /// Range position of the center of the band for `key`.
    pub fn center(&self, key: &str) -> ChartResult<f64> {
        Ok(self.position(key)? + self.band_width() / 2.0)
    }

    fn layout(&self) -> BandLayout {
        let n = self.domain.len() as f64;
        let reverse = self.range_end < self.range_start;
        let (lo, hi) = if reverse {
            (self.range_end, self.range_start)
        } else {
            (self.range_start, self.range_end)
        };

        let mut step = (hi - lo) / 1f64.max(n - self.padding + self.padding * 2.0);
        if self.round {
            step = step.floor();
        }
        let mut origin = lo + (hi - lo - step * (n - self.padding)) / 2.0;
        let mut band_width = step * (1.0 - self.padding);
        if self.round {
            origin = origin.round();
            band_width = band_width.round();
        }

        BandLayout {
            origin,
            step,
            band_width,
            reverse,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct BandLayout {
    origin: f64,
    step: f64,
    band_width: f64,
    reverse: bool,
}

impl BandLayout {
    fn slot(self, index: usize, len: usize) -> f64 {
        let index = if self.reverse { len - 1 - index } else { index };
        self.origin + self.step * index as f64
    }
}

/// Ordinal scale assigning palette colors to categorical keys.
///
/// The palette cycles when the domain is longer than the palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColorScaleRepr")]
pub struct ColorScale {
    domain: Vec<String>,
    palette: Vec<String>,
}

#[derive(Deserialize)]
struct ColorScaleRepr {
    domain: Vec<String>,
    palette: Vec<String>,
}

impl TryFrom<ColorScaleRepr> for ColorScale {
    type Error = ChartError;

    fn try_from(repr: ColorScaleRepr) -> ChartResult<Self> {
        Self::new(repr.domain, repr.palette)
    }
}

impl ColorScale {
    pub fn new(domain: Vec<String>, palette: Vec<String>) -> ChartResult<Self> {
        if domain.is_empty() {
            return Err(ChartError::InvalidData("color scale domain must not be empty".to_owned()));
        }
        if palette.is_empty() {
            return Err(ChartError::InvalidData("color palette must not be empty".to_owned()));
        }

        Ok(Self { domain, palette })
    }

    #[must_use]
    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    #[must_use]
    pub fn palette(&self) -> &[String] {
        &self.palette
    }

    /// Color token for `key`.
    pub fn color(&self, key: &str) -> ChartResult<&str> {
        let index = self
            .domain
            .iter()
            .position(|candidate| candidate == key)
            .ok_or_else(|| ChartError::UnknownKey(key.to_owned()))?;
        Ok(&self.palette[index % self.palette.len()])
    }
}

const E10: f64 = 7.071_067_811_865_475_5; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

fn tick_increment(start: f64, stop: f64, count: f64) -> f64 {
    let step = (stop - start) / count.max(1.0);
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
        -(10f64.powf(-power)) / factor
    }
}

fn tick_values(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let step = tick_increment(lo, hi, count as f64);
    if step == 0.0 || !step.is_finite() {
        return Vec::new();
    }

    // A negative increment encodes a fractional step of 1 / -step, which
    // keeps tick positions exact for sub-unit domains.
    let mut values = if step > 0.0 {
        let mut first = (lo / step).round();
        let mut last = (hi / step).round();
        if first * step < lo {
            first += 1.0;
        }
        if last * step > hi {
            last -= 1.0;
        }
        let n = ((last - first + 1.0).max(0.0)) as usize;
        (0..n).map(|i| (first + i as f64) * step).collect::<Vec<_>>()
    } else {
        let step = -step;
        let mut first = (lo * step).round();
        let mut last = (hi * step).round();
        if first / step < lo {
            first += 1.0;
        }
        if last / step > hi {
            last -= 1.0;
        }
        let n = ((last - first + 1.0).max(0.0)) as usize;
        (0..n).map(|i| (first + i as f64) / step).collect::<Vec<_>>()
    };

    if reverse {
        values.reverse();
    }
    values
}
