/// Lower bound of a percentile band; a value at or above `min` earns `percentile`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PercentileBand {
    pub min: f64,
    pub percentile: u8,
}

const fn band(min: f64, percentile: u8) -> PercentileBand {
    PercentileBand { min, percentile }
}

/// Ordered threshold ladder with a proportional fallback below the lowest band.
///
/// Bands are scanned top-down and the first band whose `min` the value reaches wins. Values
/// under every band fall back to `max(1, round(value / scale_max * 50))`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BandLadder {
    bands: &'static [PercentileBand],
    scale_max: f64,
}

impl BandLadder {
    pub(crate) fn percentile(&self, value: f64) -> u8 {
        self.bands
            .iter()
            .find(|band| value >= band.min)
            .map(|band| band.percentile)
            .unwrap_or_else(|| round_half_up(value / self.scale_max * 50.0).max(1.0) as u8)
    }

    #[cfg(test)]
    pub(crate) fn bands(&self) -> &'static [PercentileBand] {
        self.bands
    }
}

pub(crate) const SAT_LADDER: BandLadder = BandLadder {
    bands: &[
        band(1520.0, 99),
        band(1450.0, 96),
        band(1350.0, 90),
        band(1200.0, 75),
        band(1050.0, 50),
    ],
    scale_max: 1600.0,
};

pub(crate) const ACT_LADDER: BandLadder = BandLadder {
    bands: &[
        band(34.0, 99),
        band(30.0, 95),
        band(26.0, 82),
        band(21.0, 50),
    ],
    scale_max: 36.0,
};

pub(crate) const GPA_LADDER: BandLadder = BandLadder {
    bands: &[
        band(4.0, 99),
        band(3.8, 90),
        band(3.5, 75),
        band(3.0, 50),
    ],
    scale_max: 4.0,
};

/// Rounds to the nearest integer with halves going toward positive infinity.
pub(crate) fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Display rounding to one fractional digit.
pub(crate) fn round_tenths(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}
