use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::calc::percent;
use crate::input::{InputError, open_maybe_gz};
use crate::model::ConfusionMatrix;

/// Offline model evaluation as persisted after training.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationArtifact {
    pub matrix: ConfusionMatrix,
    /// Accuracy reported by the training step, as a fraction.
    pub accuracy: Option<f64>,
    pub source: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ArtifactRepr {
    Bare(Vec<Vec<f64>>),
    Wrapped {
        confusion_matrix: Vec<Vec<f64>>,
        #[serde(default)]
        accuracy: Option<f64>,
    },
}

pub fn load_artifact(path: &Path) -> Result<EvaluationArtifact, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    parse_artifact(&buf, &path.display().to_string())
}

pub fn parse_artifact(text: &str, source: &str) -> Result<EvaluationArtifact, InputError> {
    let repr: ArtifactRepr = serde_json::from_str(text).map_err(|e| InputError::Json {
        path: source.to_string(),
        source: e,
    })?;
    let (rows, accuracy) = match repr {
        ArtifactRepr::Bare(rows) => (rows, None),
        ArtifactRepr::Wrapped {
            confusion_matrix,
            accuracy,
        } => (confusion_matrix, accuracy),
    };

    let matrix = ConfusionMatrix::try_from_rows(&rows)?;
    if let Some(acc) = accuracy {
        if !acc.is_finite() || !(0.0..=1.0).contains(&acc) {
            return Err(InputError::InvalidInput(format!(
                "accuracy in {source} must be a fraction in [0, 1], got {acc}"
            )));
        }
        let derived = percent(matrix.correct(), matrix.total()) / 100.0;
        if matrix.total() > 0 && (derived - acc).abs() > 0.01 {
            warn!(
                "reported accuracy {:.4} differs from matrix accuracy {:.4} in {}",
                acc, derived, source
            );
        }
    }
    debug!(
        "loaded confusion matrix {:?} from {} (total {})",
        matrix.rows(),
        source,
        matrix.total()
    );

    Ok(EvaluationArtifact {
        matrix,
        accuracy,
        source: source.to_string(),
    })
}

/// Parses inline counts given as `TN,FP,FN,TP`.
pub fn parse_counts(counts: &str) -> Result<ConfusionMatrix, InputError> {
    let parts = counts.split(',').map(str::trim).collect::<Vec<_>>();
    if parts.len() != 4 {
        return Err(InputError::InvalidInput(format!(
            "expected 4 comma-separated counts TN,FP,FN,TP, got {}",
            parts.len()
        )));
    }
    let mut values = Vec::with_capacity(4);
    for part in parts {
        let v = part.parse::<f64>().map_err(|_| {
            InputError::InvalidInput(format!("count '{part}' is not a number"))
        })?;
        values.push(v);
    }
    let rows = vec![values[0..2].to_vec(), values[2..4].to_vec()];
    Ok(ConfusionMatrix::try_from_rows(&rows)?)
}
