//! Split derivation between two timed fractionals.

use crate::error::ChartError;
use crate::fractionals::{convert_elapsed_time, Derivation, Fractional};

/// Derives the interval between `from` and `to` as a fractional whose
/// `feet`, `time`, and `millis` are differences rather than absolute
/// values.
///
/// With `from` absent the result covers the start of the race up to `to`
/// and takes `to`'s values as-is, the formatted time included. Elapsed
/// values are populated only when both endpoints recorded milliseconds;
/// nothing partial or estimated is ever produced. Out-of-order endpoints
/// yield negative differences, left for callers with racing context to
/// judge.
pub fn calculate(
    from: Option<&Fractional>,
    to: Option<&Fractional>,
) -> Result<Fractional, ChartError> {
    let to = match to {
        Some(to) => to,
        None => {
            return Err(ChartError::InvalidInput(format!(
                "unable to create a split time for {from:?} to None"
            )))
        }
    };

    match from {
        None => {
            let split = Fractional::with_time(
                to.point,
                format!("Start to {}", to.text),
                format!("Start to {}", to.compact),
                to.feet(),
                to.time.clone(),
                to.millis,
            );
            Ok(split.with_derivation(Derivation::new(None, to.clone())))
        }
        Some(from) => {
            let feet = to.feet() - from.feet();
            let text = format!("{} to {}", from.text, to.text);
            let compact = format!("{} to {}", from.compact, to.compact);
            let millis = match (from.millis, to.millis) {
                (Some(from_millis), Some(to_millis)) => Some(to_millis - from_millis),
                _ => None,
            };
            let time = convert_elapsed_time(millis);
            let split = Fractional::with_time(to.point, text, compact, feet, time, millis);
            Ok(split.with_derivation(Derivation::new(Some(from.clone()), to.clone())))
        }
    }
}
