// src/angles.rs - Angle normalization and the threshold tables the classifiers are built from
use crate::joints::Side;

/// Rounds an offset to whole units, folding `-0` into `0`.
pub fn round_offset(value: f64) -> f64 {
    let rounded = value.round();
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// How a joint reading is scaled before it meets a threshold table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    /// Radians in, degrees out.
    Degrees,
    /// Already in table units (hand aperture).
    Raw,
}

impl Scale {
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Scale::Degrees => value.to_degrees(),
            Scale::Raw => value,
        }
    }
}

/// Which side's sign is flipped so that left and right share one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirror {
    Neither,
    Left,
    Right,
}

impl Mirror {
    pub fn apply(&self, side: Side, value: f64) -> f64 {
        match (self, side) {
            (Mirror::Left, Side::Left) | (Mirror::Right, Side::Right) => -value,
            _ => value,
        }
    }
}

/// Canonical angle of one axis for a pose symbol. Offsets are measured from
/// it and counted positive in `sign` direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canonical {
    pub angle: f64,
    pub sign: f64,
}

impl Canonical {
    pub const fn rising(angle: f64) -> Self {
        Self { angle, sign: 1.0 }
    }

    pub const fn falling(angle: f64) -> Self {
        Self { angle, sign: -1.0 }
    }

    pub fn offset(&self, value: f64) -> f64 {
        round_offset(self.sign * (value - self.angle))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    AtLeast(f64),
    AtMost(f64),
}

impl Bound {
    pub fn admits(&self, value: f64) -> bool {
        match *self {
            Bound::AtLeast(limit) => value >= limit,
            Bound::AtMost(limit) => value <= limit,
        }
    }
}

/// Admits everything when there is no bound; that is the fallback row.
pub fn admits(bound: Option<Bound>, value: f64) -> bool {
    bound.map_or(true, |b| b.admits(value))
}

/// One row of a single-axis threshold table. Rows are tried in order and the
/// first admitting row wins, so every table ends with an unbounded row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRule {
    pub symbol: &'static str,
    pub bound: Option<Bound>,
    /// `None` for symbols that take no offset parameter.
    pub canonical: Option<Canonical>,
}

impl AxisRule {
    pub fn offsets(&self, value: f64) -> Vec<f64> {
        self.canonical
            .map(|c| vec![c.offset(value)])
            .unwrap_or_default()
    }
}

pub fn classify_axis(rules: &'static [AxisRule], value: f64) -> Option<&'static AxisRule> {
    rules.iter().find(|rule| admits(rule.bound, value))
}
