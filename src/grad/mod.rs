pub mod finite_difference;

pub use finite_difference::{estimate, DifferenceScheme};
