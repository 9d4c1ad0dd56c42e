use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::input::{InputError, open_maybe_gz};
use crate::model::BusinessParameters;

/// Partial business parameters from a parameter file or command-line flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamOverrides {
    pub avg_value: Option<f64>,
    pub interest_rate: Option<f64>,
    pub project_cost: Option<f64>,
}

impl ParamOverrides {
    fn apply(&self, base: &mut BusinessParameters) {
        if let Some(v) = self.avg_value {
            base.avg_value = v;
        }
        if let Some(v) = self.interest_rate {
            base.interest_rate = v;
        }
        if let Some(v) = self.project_cost {
            base.project_cost = Some(v);
        }
    }
}

pub fn load_param_overrides(path: &Path) -> Result<ParamOverrides, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    serde_json::from_str(&buf).map_err(|e| InputError::Json {
        path: path.display().to_string(),
        source: e,
    })
}

/// Flags win over the file, the file wins over built-in defaults.
pub fn resolve_params(
    file: Option<&ParamOverrides>,
    flags: &ParamOverrides,
) -> BusinessParameters {
    let mut params = BusinessParameters::default_v1();
    if let Some(file) = file {
        file.apply(&mut params);
    }
    flags.apply(&mut params);
    params
}
