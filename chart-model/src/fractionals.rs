//! Fractional points and the timed values recorded at them.

use serde::Serialize;

use crate::decimal::round_to;
use crate::error::ChartError;

const FEET_PER_FURLONG: f64 = 660.0;

/// Formats elapsed milliseconds as `minutes:seconds.millis`, e.g.
/// 75034 becomes "1:15.034". Pure integer arithmetic over a non-negative
/// count; absent input passes through.
pub fn convert_elapsed_time(millis: Option<i64>) -> Option<String> {
    millis.map(|millis| {
        let minutes = millis / 60_000;
        let seconds = (millis / 1_000) % 60;
        let sub_second = millis % 1_000;
        format!("{minutes}:{seconds:02}.{sub_second:03}")
    })
}

/// A single timed point within a race distance.
///
/// `feet` and `furlongs` move together: `furlongs` is `feet / 660` rounded
/// to two decimal places and is recomputed whenever the distance changes,
/// never on read. An elapsed time may be recorded as raw `millis` without a
/// formatted `time`; the two predicates check different things and callers
/// must pick the one their workflow needs.
///
/// A split is a `Fractional` whose values are differences and which carries
/// a [`Derivation`]; consumers branch on [`Fractional::derivation`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fractional {
    pub point: i32,
    pub text: String,
    pub compact: String,
    feet: i32,
    furlongs: f64,
    pub time: Option<String>,
    pub millis: Option<i64>,
    #[serde(flatten)]
    derivation: Option<Box<Derivation>>,
}

impl Fractional {
    pub fn new(
        point: i32,
        text: impl Into<String>,
        compact: impl Into<String>,
        feet: i32,
    ) -> Self {
        Self::with_time(point, text, compact, feet, None, None)
    }

    pub fn with_time(
        point: i32,
        text: impl Into<String>,
        compact: impl Into<String>,
        feet: i32,
        time: Option<String>,
        millis: Option<i64>,
    ) -> Self {
        Self {
            point,
            text: text.into(),
            compact: compact.into(),
            feet,
            furlongs: furlongs_for(feet),
            time,
            millis,
            derivation: None,
        }
    }

    pub fn feet(&self) -> i32 {
        self.feet
    }

    /// Distance in furlongs, two decimal places, kept in lockstep with
    /// `feet`.
    pub fn furlongs(&self) -> f64 {
        self.furlongs
    }

    /// Updates the distance and its derived furlong value together.
    pub fn set_feet(&mut self, feet: i32) {
        self.feet = feet;
        self.furlongs = furlongs_for(feet);
    }

    /// True when an elapsed time was recorded, formatted or not.
    pub fn has_fractional_value(&self) -> bool {
        self.millis.is_some()
    }

    /// True when both the formatted time and the raw milliseconds are
    /// present.
    pub fn has_time_and_millis(&self) -> bool {
        let formatted = self.time.as_ref().map(|time| !time.is_empty()).unwrap_or(false);
        formatted && self.millis.is_some()
    }

    /// Checks [`Fractional::has_time_and_millis`] for callers whose
    /// workflow needs timed data.
    pub fn require_time_and_millis(&self) -> Result<(), ChartError> {
        if self.has_time_and_millis() {
            Ok(())
        } else {
            Err(ChartError::MissingFractionalTime(format!(
                "no recorded time for {}",
                self.text
            )))
        }
    }

    /// Present only when this value is a split derived from two points.
    pub fn derivation(&self) -> Option<&Derivation> {
        self.derivation.as_deref()
    }

    pub(crate) fn with_derivation(mut self, derivation: Derivation) -> Self {
        self.derivation = Some(Box::new(derivation));
        self
    }
}

fn furlongs_for(feet: i32) -> f64 {
    round_to(f64::from(feet) / FEET_PER_FURLONG, 2).to_f64()
}

/// The endpoints a split was derived from. Read-only provenance; the
/// referenced fractionals are never mutated through the split.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Derivation {
    from: Option<Fractional>,
    to: Fractional,
}

impl Derivation {
    pub(crate) fn new(from: Option<Fractional>, to: Fractional) -> Self {
        Self { from, to }
    }

    /// Absent for a start-of-race split.
    pub fn from(&self) -> Option<&Fractional> {
        self.from.as_ref()
    }

    pub fn to(&self) -> &Fractional {
        &self.to
    }
}

/// The fractionals recorded for a particular race distance.
///
/// `fractionals` keeps insertion order, which is race-progress order:
/// entries ascend in elapsed distance and no two share a `point`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FractionalPoint {
    pub distance: String,
    pub floor: i32,
    pub fractionals: Vec<Fractional>,
}

impl FractionalPoint {
    pub fn new(floor: i32) -> Self {
        Self {
            distance: String::new(),
            floor,
            fractionals: Vec::new(),
        }
    }

    pub fn with_fractionals(
        distance: impl Into<String>,
        floor: i32,
        fractionals: Vec<Fractional>,
    ) -> Self {
        Self {
            distance: distance.into(),
            floor,
            fractionals,
        }
    }

    /// Comma-joined display labels of the recorded fractionals.
    pub fn fractional_distances(&self) -> String {
        let texts: Vec<&str> = self
            .fractionals
            .iter()
            .map(|fractional| fractional.text.as_str())
            .collect();
        texts.join(",")
    }
}
