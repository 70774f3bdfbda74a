use std::error::Error;

use clap::Args;
use vtv_core::HashAlgorithm;
use vtv_crypto::{RandomOracle, ZeroPadding};
use vtv_hex::DEFAULT_ROW_WIDTH;

#[derive(Args, Debug)]
pub struct OracleArgs {
    /// Hash function identifier, e.g. SHA-256.
    #[arg(long, default_value = "SHA-256")]
    pub hash: HashAlgorithm,
    /// Output length in bits.
    #[arg(long)]
    pub bits: u32,
    /// Oracle input as hex (may be empty).
    #[arg(long, default_value = "")]
    pub input: String,
    /// Which padding bits are cleared: trailing-lsb or leading-msb.
    #[arg(long, default_value = "trailing-lsb")]
    pub padding: ZeroPadding,
    /// Bytes per printed row.
    #[arg(long, default_value_t = DEFAULT_ROW_WIDTH)]
    pub width: usize,
}

pub fn run(args: &OracleArgs) -> Result<(), Box<dyn Error>> {
    let oracle = RandomOracle::with_padding(args.hash, args.bits, args.padding)?;
    let input = vtv_hex::from_hex(&args.input)?;
    let output = oracle.hash(&input);
    for row in vtv_hex::render(&output, args.width)? {
        println!("{row}");
    }
    Ok(())
}
