use std::error::Error;

use clap::Args;
use vtv_core::HashAlgorithm;
use vtv_crypto::{HashPrg, Prg};
use vtv_hex::DEFAULT_ROW_WIDTH;

#[derive(Args, Debug)]
pub struct PrgArgs {
    /// Hash function identifier, e.g. SHA-256.
    #[arg(long, default_value = "SHA-256")]
    pub hash: HashAlgorithm,
    /// Seed as hex; must cover at least one digest.
    #[arg(long)]
    pub seed: String,
    /// Number of bytes to expand.
    #[arg(long)]
    pub len: usize,
    /// Bytes per printed row.
    #[arg(long, default_value_t = DEFAULT_ROW_WIDTH)]
    pub width: usize,
}

pub fn run(args: &PrgArgs) -> Result<(), Box<dyn Error>> {
    let seed = vtv_hex::from_hex(&args.seed)?;
    let mut prg = HashPrg::new(args.hash, &seed)?;
    let output = prg.get_bytes(args.len)?;
    for row in vtv_hex::render(&output, args.width)? {
        println!("{row}");
    }
    Ok(())
}
