#![deny(missing_docs)]
//! Hash-based pseudorandom generator and bit-length random oracle.

pub mod oracle;
pub mod prg;
pub mod rng;
pub mod seed_file;

pub use oracle::{OracleDigest, RandomOracle, ZeroPadding};
pub use prg::HashPrg;
pub use rng::PrgRng;
pub use seed_file::reseed_from_file;
pub use vtv_core::Prg;
