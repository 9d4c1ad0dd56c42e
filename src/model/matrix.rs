use serde::Serialize;

use crate::calc::CalcError;

/// Binary confusion matrix laid out as `[[TN, FP], [FN, TP]]`.
///
/// Rows are the actual class (0 = legitimate, 1 = fraud), columns the
/// predicted class. Counts are unsigned, so a constructed matrix is always
/// valid; untyped input goes through [`ConfusionMatrix::try_from_rows`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(into = "[[u64; 2]; 2]")]
pub struct ConfusionMatrix {
    pub true_negatives: u64,
    pub false_positives: u64,
    pub false_negatives: u64,
    pub true_positives: u64,
}

impl ConfusionMatrix {
    pub fn new(tn: u64, fp: u64, fn_: u64, tp: u64) -> Self {
        Self {
            true_negatives: tn,
            false_positives: fp,
            false_negatives: fn_,
            true_positives: tp,
        }
    }

    /// Validates nested rows as read from an evaluation artifact.
    ///
    /// Rejects anything that is not exactly 2x2 or holds a negative,
    /// non-finite or fractional count.
    pub fn try_from_rows(rows: &[Vec<f64>]) -> Result<Self, CalcError> {
        if rows.len() != 2 {
            return Err(CalcError::InvalidMatrixShape(format!(
                "expected 2 rows, got {}",
                rows.len()
            )));
        }
        let mut cells = [0u64; 4];
        for (r, row) in rows.iter().enumerate() {
            if row.len() != 2 {
                return Err(CalcError::InvalidMatrixShape(format!(
                    "row {r} has {} columns, expected 2",
                    row.len()
                )));
            }
            for (c, &value) in row.iter().enumerate() {
                cells[r * 2 + c] = count_from_f64(value).ok_or_else(|| {
                    CalcError::InvalidMatrixShape(format!(
                        "entry [{r}][{c}] = {value} is not a non-negative integer count"
                    ))
                })?;
            }
        }
        Ok(Self::new(cells[0], cells[1], cells[2], cells[3]))
    }

    pub fn total(&self) -> u64 {
        self.true_negatives + self.false_positives + self.false_negatives + self.true_positives
    }

    /// Transactions flagged as fraud (predicted positive).
    pub fn alerts(&self) -> u64 {
        self.true_positives + self.false_positives
    }

    pub fn actual_fraud(&self) -> u64 {
        self.false_negatives + self.true_positives
    }

    pub fn actual_legitimate(&self) -> u64 {
        self.true_negatives + self.false_positives
    }

    pub fn correct(&self) -> u64 {
        self.true_negatives + self.true_positives
    }

    pub fn rows(&self) -> [[u64; 2]; 2] {
        [
            [self.true_negatives, self.false_positives],
            [self.false_negatives, self.true_positives],
        ]
    }
}

impl From<ConfusionMatrix> for [[u64; 2]; 2] {
    fn from(value: ConfusionMatrix) -> Self {
        value.rows()
    }
}

fn count_from_f64(value: f64) -> Option<u64> {
    // 2^53: beyond this f64 no longer represents every integer.
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > MAX_EXACT {
        return None;
    }
    Some(value as u64)
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/matrix.rs"]
mod tests;
