use std::error::Error;

use clap::Args;
use serde::Serialize;
use vtv_core::HashAlgorithm;
use vtv_vectors::{to_canonical_json_bytes, DOCUMENT_SCHEMA};

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Emit extended metadata as JSON.
    #[arg(long)]
    pub long: bool,
}

#[derive(Debug, Serialize)]
struct VersionInfo {
    version: String,
    document_schema: String,
    hash_functions: Vec<String>,
}

pub fn run(args: &VersionArgs) -> Result<(), Box<dyn Error>> {
    if !args.long {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let info = VersionInfo {
        version: env!("CARGO_PKG_VERSION").into(),
        document_schema: format!(
            "{}.{}.{}",
            DOCUMENT_SCHEMA.major, DOCUMENT_SCHEMA.minor, DOCUMENT_SCHEMA.patch
        ),
        hash_functions: HashAlgorithm::ALL
            .iter()
            .map(|hash| hash.to_string())
            .collect(),
    };
    let json = to_canonical_json_bytes(&info)?;
    println!("{}", String::from_utf8(json)?);
    Ok(())
}
