//! Shared value objects for recovered racing charts: fractional points,
//! split derivation, and the decimal arithmetic everything rounds with.

pub mod decimal;
pub mod error;
pub mod fractionals;
pub mod splits;

pub use error::ChartError;
pub use fractionals::{convert_elapsed_time, Derivation, Fractional, FractionalPoint};
