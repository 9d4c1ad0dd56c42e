mod calc;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{error, info};

use crate::calc::CalcError;
use crate::input::{
    EvaluationArtifact, InputError, ParamOverrides, load_artifact, load_param_overrides,
    parse_counts, resolve_params,
};
use crate::model::MetricFraming;
use crate::pipeline::evaluate::{EvaluateInputs, run_evaluate};
use crate::pipeline::reports::{read_git_hash, write_reports};
use crate::report::{ReportError, ToolMeta};

const TOOL_NAME: &str = "kira-fraudimpact";

#[derive(Debug, Parser)]
#[command(name = "kira-fraudimpact", version, about = "Fraud model alert quality and financial impact")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate a confusion matrix and write summary.json, impact.tsv and report.txt.
    Run(RunArgs),
}

#[derive(Debug, Clone, Args)]
struct RunArgs {
    /// Evaluation artifact (JSON, optionally .gz).
    #[arg(long, required_unless_present = "counts", conflicts_with = "counts")]
    matrix: Option<PathBuf>,
    /// Inline counts as TN,FP,FN,TP.
    #[arg(long, value_name = "TN,FP,FN,TP")]
    counts: Option<String>,
    #[arg(long)]
    out: PathBuf,
    /// JSON file with avg_value, interest_rate and project_cost.
    #[arg(long)]
    params: Option<PathBuf>,
    #[arg(long, allow_negative_numbers = true)]
    avg_value: Option<f64>,
    /// Fraction, e.g. 0.29.
    #[arg(long, allow_negative_numbers = true)]
    interest_rate: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    project_cost: Option<f64>,
    #[arg(long, value_enum, default_value_t = FramingArg::Both)]
    framing: FramingArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FramingArg {
    Fraud,
    Approval,
    Both,
}

impl FramingArg {
    fn framings(self) -> Vec<MetricFraming> {
        match self {
            FramingArg::Fraud => vec![MetricFraming::FraudAlert],
            FramingArg::Approval => vec![MetricFraming::Approval],
            FramingArg::Both => vec![MetricFraming::FraudAlert, MetricFraming::Approval],
        }
    }
}

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Calc(#[from] CalcError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    let result = match cli.command {
        Command::Run(args) => run(&args),
    };
    if let Err(err) = result {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(args: &RunArgs) -> Result<(), RunError> {
    let artifact = load_evaluation(args)?;

    let file_overrides = match &args.params {
        Some(path) => Some(load_param_overrides(path)?),
        None => None,
    };
    let params = resolve_params(file_overrides.as_ref(), &flag_overrides(args));
    info!(
        "business parameters: avg_value={} interest_rate={} project_cost={:?}",
        params.avg_value, params.interest_rate, params.project_cost
    );

    let framings = args.framing.framings();
    let summary = run_evaluate(&EvaluateInputs {
        artifact: &artifact,
        params: &params,
        framings: &framings,
        tool: ToolMeta {
            name: TOOL_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            git_hash: read_git_hash(Path::new(".")),
        },
    })?;
    info!(
        "net impact {:.2} over {} transactions",
        summary.net_impact, summary.input.total
    );

    write_reports(&summary, &args.out)?;
    Ok(())
}

fn load_evaluation(args: &RunArgs) -> Result<EvaluationArtifact, InputError> {
    match (&args.matrix, &args.counts) {
        (Some(path), _) => {
            info!("loading evaluation artifact {}", path.display());
            load_artifact(path)
        }
        (None, Some(counts)) => Ok(EvaluationArtifact {
            matrix: parse_counts(counts)?,
            accuracy: None,
            source: "inline counts".to_string(),
        }),
        (None, None) => Err(InputError::MissingInput(
            "either --matrix or --counts is required".to_string(),
        )),
    }
}

fn flag_overrides(args: &RunArgs) -> ParamOverrides {
    ParamOverrides {
        avg_value: args.avg_value,
        interest_rate: args.interest_rate,
        project_cost: args.project_cost,
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
