use clap::Args;

use rectlab_core::Rect;
use rectlab_core::config::OutputConfig;

use crate::output;

/// Arguments for the `pair` subcommand.
#[derive(Args)]
pub struct PairArgs {
    /// First rectangle as x,y,width,height
    #[arg(value_parser = parse_rect, allow_hyphen_values = true)]
    a: Rect,
    /// Second rectangle as x,y,width,height
    #[arg(value_parser = parse_rect, allow_hyphen_values = true)]
    b: Rect,
}

pub fn execute(args: &PairArgs, out: &OutputConfig) {
    let report = rectlab_core::compare(&args.a, &args.b);
    output::emit(out, &report, output::render_pair);
}

/// Parses `x,y,width,height` into a validated rectangle.
fn parse_rect(s: &str) -> Result<Rect, String> {
    let values = s
        .split(',')
        .map(|part| part.trim().parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("'{s}': {e}"))?;
    let &[x, y, width, height] = values.as_slice() else {
        return Err(format!(
            "'{s}': expected 4 comma-separated values, got {}",
            values.len()
        ));
    };
    Rect::new(x, y, width, height).map_err(|e| e.to_string())
}
