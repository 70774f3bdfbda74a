#![deny(missing_docs)]
#![doc = "Core contracts for deterministic PRG and random-oracle test vectors."]

pub mod errors;
pub mod hash;
pub mod provenance;

pub use errors::{ErrorInfo, VtvError};
pub use hash::{HashAlgorithm, Hashfunction};
pub use provenance::{SchemaVersion, VectorProvenance};

/// Describes a seeded, stateful pseudorandom generator.
///
/// The stream produced after [`Prg::set_seed`] is a pure function of the seed:
/// two generators seeded identically emit identical bytes, and successive
/// reads continue the stream without gaps.
pub trait Prg {
    /// Minimum number of seed bytes accepted by [`Prg::set_seed`].
    fn min_seed_bytes(&self) -> usize;

    /// Replaces the seed and restarts the stream.
    fn set_seed(&mut self, seed: &[u8]) -> Result<(), VtvError>;

    /// Fills `dest` with the next `dest.len()` bytes of the stream.
    fn fill_bytes(&mut self, dest: &mut [u8]);

    /// Returns the next `len` bytes of the stream.
    fn get_bytes(&mut self, len: usize) -> Result<Vec<u8>, VtvError> {
        if len == 0 {
            return Err(VtvError::zero_length("output length"));
        }
        let mut out = vec![0u8; len];
        self.fill_bytes(&mut out);
        Ok(out)
    }
}
