//! Whitespace, column, and line-break inference from positional deltas.

use chart_model::decimal::{round, Decimal};

use crate::positioned::PositionedChar;

/// Marks a column gap in recovered text; downstream consumers treat it as
/// a field delimiter.
pub const COLUMN_SEPARATOR: char = '|';

// Gaps at or below one thousandth of a document unit are rounding noise,
// not whitespace: legitimately-adjacent glyphs occasionally round up to a
// minutely positive gap.
const GAP_EPSILON: Decimal = Decimal::new(1, 3);

// Gaps wider than three document units separate columns.
const COLUMN_GAP: Decimal = Decimal::new(3_000, 3);

// Vertical jumps beyond four document units start a new line.
const LINE_BREAK_DELTA: f64 = 4.0;

/// Converts positioned characters into a string, inserting spaces, column
/// separators, and line breaks where the deltas between adjacent
/// characters call for them. An empty sequence yields an empty string;
/// the first character never triggers a decision.
pub fn convert_to_text(chars: &[PositionedChar]) -> String {
    let mut out = String::new();
    let mut prev: Option<&PositionedChar> = None;
    for curr in chars {
        if let Some(prev) = prev {
            out.push_str(whitespace_between(curr.x, prev.x, prev.width));
            if (curr.y - prev.y).abs() > LINE_BREAK_DELTA {
                out.push('\n');
            }
        }
        out.push(curr.glyph);
        prev = Some(curr);
    }
    out
}

/// Classifies the gap between two adjacent characters as nothing, a
/// space, or a column separator. Each input is rounded to three decimal
/// places before the subtraction so accumulated float error cannot move a
/// gap across a threshold.
pub fn whitespace_between(curr_x: f64, prev_x: f64, prev_width: f64) -> &'static str {
    let spacing = round(curr_x) - (round(prev_x) + round(prev_width));
    if spacing > GAP_EPSILON && spacing <= COLUMN_GAP {
        " "
    } else if spacing > COLUMN_GAP {
        "|"
    } else {
        ""
    }
}
