use crate::error::{Error, Result};

/// Immutable ordered collection of fixed-arity training records.
///
/// Stored row-major in one contiguous buffer: each record is
/// `input_arity` input values followed by a single target value, so the
/// stored row width is `input_arity + 1`. A `Dataset` is non-empty by
/// construction, which keeps every mean over it well defined.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    values: Vec<f64>,
    input_arity: usize,
    len: usize,
}

impl Dataset {
    /// Builds a dataset from per-record rows of `inputs..., target`.
    ///
    /// Rejects an empty sequence, rows narrower than one input plus the
    /// target, and rows of inconsistent width.
    pub fn from_records(rows: &[Vec<f64>]) -> Result<Dataset> {
        let Some(first) = rows.first() else {
            return Err(Error::EmptyDataset);
        };
        let width = first.len();
        if width < 2 {
            return Err(Error::ArityMismatch {
                expected: 1,
                found: width.saturating_sub(1),
            });
        }
        for row in rows {
            if row.len() != width {
                return Err(Error::ArityMismatch {
                    expected: width - 1,
                    found: row.len().saturating_sub(1),
                });
            }
        }

        let mut values = Vec::with_capacity(rows.len() * width);
        for row in rows {
            values.extend_from_slice(row);
        }

        Ok(Dataset {
            values,
            input_arity: width - 1,
            len: rows.len(),
        })
    }

    /// Number of records. Always at least 1.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Inputs per record (record width minus the target).
    pub fn input_arity(&self) -> usize {
        self.input_arity
    }

    /// Input slice of record `idx`. Panics if `idx >= len`.
    pub fn inputs(&self, idx: usize) -> &[f64] {
        let start = idx * (self.input_arity + 1);
        &self.values[start..start + self.input_arity]
    }

    /// Target value of record `idx`. Panics if `idx >= len`.
    pub fn target(&self, idx: usize) -> f64 {
        self.values[idx * (self.input_arity + 1) + self.input_arity]
    }

    /// Iterates records in their fixed stored order.
    pub fn iter(&self) -> impl Iterator<Item = (&[f64], f64)> + '_ {
        (0..self.len).map(move |i| (self.inputs(i), self.target(i)))
    }
}
