use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::{check_shape, Model, ParamVector};

/// Rounds a sigmoid output to a gate truth value at the 0.5 midpoint.
pub fn threshold(raw: f64) -> u8 {
    if raw > 0.5 {
        1
    } else {
        0
    }
}

/// One evaluated boolean input pair.
#[derive(Debug, Clone, Serialize)]
pub struct TruthRow {
    pub x1: u8,
    pub x2: u8,
    /// Raw model output before thresholding.
    pub raw: f64,
    /// Output rounded at 0.5.
    pub bit: u8,
}

/// A trained 2-input model evaluated on all four boolean input pairs,
/// in (0,0), (0,1), (1,0), (1,1) order.
#[derive(Debug, Clone, Serialize)]
pub struct TruthTable {
    pub rows: Vec<TruthRow>,
}

impl TruthTable {
    pub fn tabulate(model: &dyn Model, params: &ParamVector) -> Result<TruthTable> {
        check_shape(model, params)?;
        if model.input_arity() != 2 {
            return Err(Error::ArityMismatch {
                expected: 2,
                found: model.input_arity(),
            });
        }

        let mut rows = Vec::with_capacity(4);
        for x1 in 0..2u8 {
            for x2 in 0..2u8 {
                let raw = model.evaluate(params, &[f64::from(x1), f64::from(x2)]);
                rows.push(TruthRow {
                    x1,
                    x2,
                    raw,
                    bit: threshold(raw),
                });
            }
        }
        Ok(TruthTable { rows })
    }

    /// True when the thresholded outputs equal `expected` row for row,
    /// in (0,0), (0,1), (1,0), (1,1) order.
    pub fn matches(&self, expected: [u8; 4]) -> bool {
        self.rows
            .iter()
            .zip(expected.iter())
            .all(|(row, want)| row.bit == *want)
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(
                f,
                "f({}, {}) = {:.6}  -> {}",
                row.x1, row.x2, row.raw, row.bit
            )?;
        }
        Ok(())
    }
}
