//! Half-up decimal rounding used wherever numbers cross the text boundary.
//!
//! Rounding goes through the value's shortest base-10 rendering rather than
//! binary float comparison, so a near-threshold layout gap classifies the
//! same way on every pass.

use std::cmp::Ordering;
use std::ops::{Add, Sub};

/// Decimal value held as an integer count of `10^-scale` units.
#[derive(Debug, Clone, Copy)]
pub struct Decimal {
    units: i128,
    scale: u32,
}

impl Decimal {
    pub const fn new(units: i128, scale: u32) -> Self {
        Self { units, scale }
    }

    pub fn units(&self) -> i128 {
        self.units
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn to_f64(&self) -> f64 {
        self.units as f64 / 10f64.powi(self.scale as i32)
    }

    /// Units of both operands expressed at the wider of the two scales.
    fn aligned(&self, other: &Decimal) -> (i128, i128, u32) {
        let scale = self.scale.max(other.scale);
        (
            rescale(self.units, scale - self.scale),
            rescale(other.units, scale - other.scale),
            scale,
        )
    }
}

fn rescale(units: i128, by: u32) -> i128 {
    (0..by).fold(units, |units, _| units.saturating_mul(10))
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        let (lhs, rhs, _) = self.aligned(other);
        lhs == rhs
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let (lhs, rhs, _) = self.aligned(other);
        lhs.cmp(&rhs)
    }
}

impl Add for Decimal {
    type Output = Decimal;

    fn add(self, rhs: Decimal) -> Decimal {
        let (lhs, rhs, scale) = self.aligned(&rhs);
        Decimal::new(lhs.saturating_add(rhs), scale)
    }
}

impl Sub for Decimal {
    type Output = Decimal;

    fn sub(self, rhs: Decimal) -> Decimal {
        let (lhs, rhs, scale) = self.aligned(&rhs);
        Decimal::new(lhs.saturating_sub(rhs), scale)
    }
}

/// Round half-up to three decimal places.
pub fn round(value: f64) -> Decimal {
    round_to(value, 3)
}

/// Round half-up (ties away from zero) to `scale` fractional digits.
///
/// Works on the shortest decimal rendering of `value`; never fails. A
/// non-finite input resolves deterministically instead (NaN to zero,
/// infinities saturate).
pub fn round_to(value: f64, scale: u32) -> Decimal {
    if value.is_nan() {
        return Decimal::new(0, scale);
    }
    if value.is_infinite() {
        let units = if value > 0.0 { i128::MAX } else { i128::MIN };
        return Decimal::new(units, scale);
    }

    let rendered = format!("{value}");
    let (sign, digits) = match rendered.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, rendered.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (digits, ""),
    };

    let mut units: i128 = 0;
    for byte in int_part.bytes() {
        units = units
            .saturating_mul(10)
            .saturating_add(i128::from(byte - b'0'));
    }
    let mut frac = frac_part.bytes();
    for _ in 0..scale {
        let digit = frac.next().map(|byte| i128::from(byte - b'0')).unwrap_or(0);
        units = units.saturating_mul(10).saturating_add(digit);
    }
    // First dropped digit decides the half-up bump.
    if let Some(byte) = frac.next() {
        if byte >= b'5' {
            units = units.saturating_add(1);
        }
    }

    Decimal::new(units.saturating_mul(sign), scale)
}
