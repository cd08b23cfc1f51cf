pub mod truth_table;

pub use truth_table::{threshold, TruthRow, TruthTable};
