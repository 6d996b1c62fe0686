use clap::Args;

use rectlab_core::config::OutputConfig;
use rectlab_core::report;

use super::fail;
use super::scene::SceneArgs;
use crate::output;

/// Arguments for the `evaluate` subcommand.
#[derive(Args)]
pub struct EvaluateArgs {
    /// Rectangle to evaluate (all rectangles when omitted)
    name: Option<String>,
    #[command(flatten)]
    source: SceneArgs,
}

pub fn execute(args: &EvaluateArgs, out: &OutputConfig) {
    let scene = args.source.load().unwrap_or_else(|e| fail(e));

    let evaluations = match &args.name {
        Some(name) => vec![report::evaluate(&scene, name).unwrap_or_else(|e| fail(e))],
        None => report::evaluate_all(&scene),
    };
    output::emit(out, &evaluations, |evaluations| {
        output::render_evaluations(evaluations, out.describe_features)
    });
}
