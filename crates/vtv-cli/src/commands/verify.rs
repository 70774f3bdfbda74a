use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use vtv_vectors::{read_document, verify_against_plan};

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Golden JSON document produced by `vtv generate --format json`.
    #[arg(long)]
    pub golden: PathBuf,
    /// Print the full report as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &VerifyArgs) -> Result<(), Box<dyn Error>> {
    let golden = read_document(&args.golden)?;
    let report = verify_against_plan(&golden)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for mismatch in &report.mismatches {
            println!(
                "mismatch #{} {} [{}]: expected {} got {}",
                mismatch.index, mismatch.label, mismatch.field, mismatch.expected, mismatch.actual
            );
        }
    }
    let checked = report.checked;
    report.into_result()?;
    if !args.json {
        println!("{checked} vectors verified successfully");
    }
    Ok(())
}
