use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use vtv_crypto::ZeroPadding;
use vtv_vectors::{generate, render, Format, VectorPlan};

use super::emit;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// YAML plan; the standard vector set is used when omitted.
    #[arg(long)]
    pub plan: Option<PathBuf>,
    /// Output format: latex, text or json.
    #[arg(long, default_value = "latex")]
    pub format: Format,
    /// Override the plan's padding convention (trailing-lsb or leading-msb).
    #[arg(long)]
    pub padding: Option<ZeroPadding>,
    /// Override the plan's row width in bytes.
    #[arg(long)]
    pub width: Option<usize>,
    /// Write to this file instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
    let mut plan = match &args.plan {
        Some(path) => VectorPlan::load(path)?,
        None => VectorPlan::standard(),
    };
    if let Some(padding) = args.padding {
        plan.padding = padding;
    }
    if let Some(width) = args.width {
        plan.row_width = width;
    }
    let document = generate(&plan)?;
    let mut body = render(&document, args.format)?;
    if !body.ends_with('\n') {
        body.push('\n');
    }
    emit(&body, args.out.as_deref())
}
