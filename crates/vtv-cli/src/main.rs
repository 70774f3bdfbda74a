use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    generate::{self, GenerateArgs},
    oracle::{self, OracleArgs},
    prg::{self, PrgArgs},
    verify::{self, VerifyArgs},
    version::{self, VersionArgs},
};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "vtv", about = "PRG and random oracle test-vector tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the vectors of a plan (the standard set by default).
    Generate(GenerateArgs),
    /// Regenerate a golden JSON document and compare byte for byte.
    Verify(VerifyArgs),
    /// Expand an explicit seed.
    Prg(PrgArgs),
    /// Evaluate the random oracle on an explicit input.
    Oracle(OracleArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn init_tracing() {
    // Artifacts go to stdout, diagnostics to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vtv_cli=info,vtv_vectors=info,vtv_crypto=info,warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn dispatch(command: Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Generate(args) => generate::run(&args),
        Command::Verify(args) => verify::run(&args),
        Command::Prg(args) => prg::run(&args),
        Command::Oracle(args) => oracle::run(&args),
        Command::Version(args) => version::run(&args),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let cli = Cli::parse();
    dispatch(cli.command).inspect_err(|err| tracing::error!("{err}"))
}
