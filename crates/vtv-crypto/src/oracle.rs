//! Random oracle with an exact output bit length.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use vtv_core::{ErrorInfo, HashAlgorithm, Hashfunction, Prg, VtvError};

use crate::prg::HashPrg;

/// Which bits of the output are forced to zero when the bit length is not a
/// multiple of eight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZeroPadding {
    /// Clear the least-significant excess bits of the last byte.
    #[default]
    TrailingLsb,
    /// Clear the most-significant excess bits of the first byte, so the
    /// output reads as a big-endian integer below `2^output_bits`.
    LeadingMsb,
}

impl ZeroPadding {
    /// Canonical identifier used in plans and on the command line.
    pub const fn identifier(self) -> &'static str {
        match self {
            ZeroPadding::TrailingLsb => "trailing-lsb",
            ZeroPadding::LeadingMsb => "leading-msb",
        }
    }

    /// Zeroes the bits of `output` beyond `output_bits`.
    ///
    /// `output` must hold exactly `ceil(output_bits / 8)` bytes.
    pub fn apply(self, output: &mut [u8], output_bits: u32) {
        let used = output_bits % 8;
        if used == 0 {
            return;
        }
        let excess = 8 - used;
        match self {
            ZeroPadding::TrailingLsb => {
                if let Some(last) = output.last_mut() {
                    *last &= 0xffu8 << excess;
                }
            }
            ZeroPadding::LeadingMsb => {
                if let Some(first) = output.first_mut() {
                    *first &= 0xffu8 >> excess;
                }
            }
        }
    }
}

impl FromStr for ZeroPadding {
    type Err = VtvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trailing-lsb" => Ok(ZeroPadding::TrailingLsb),
            "leading-msb" => Ok(ZeroPadding::LeadingMsb),
            other => Err(VtvError::Serde(
                ErrorInfo::new("unknown-padding", "unrecognised zero padding convention")
                    .with_context("value", other)
                    .with_hint("expected trailing-lsb or leading-msb"),
            )),
        }
    }
}

impl fmt::Display for ZeroPadding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Hash function with a caller-chosen output length in bits.
///
/// The input is hashed together with a 4-byte big-endian encoding of the bit
/// length; the digest seeds a [`HashPrg`] whose first `ceil(bits / 8)` bytes
/// form the output after the padding bits are cleared. Prefixing the length
/// keeps oracles of different lengths from sharing outputs.
#[derive(Debug, Clone)]
pub struct RandomOracle<H: Hashfunction = HashAlgorithm> {
    hash: H,
    output_bits: u32,
    padding: ZeroPadding,
}

impl<H: Hashfunction> RandomOracle<H> {
    /// Creates an oracle using the default [`ZeroPadding::TrailingLsb`].
    pub fn new(hash: H, output_bits: u32) -> Result<Self, VtvError> {
        Self::with_padding(hash, output_bits, ZeroPadding::default())
    }

    /// Creates an oracle with an explicit padding convention.
    pub fn with_padding(hash: H, output_bits: u32, padding: ZeroPadding) -> Result<Self, VtvError> {
        if output_bits == 0 {
            return Err(VtvError::zero_length("output bits"));
        }
        Ok(Self {
            hash,
            output_bits,
            padding,
        })
    }

    /// Requested output length in bits.
    pub fn output_bits(&self) -> u32 {
        self.output_bits
    }

    /// Output length in bytes, `ceil(output_bits / 8)`.
    pub fn output_len(&self) -> usize {
        (self.output_bits as usize).div_ceil(8)
    }

    /// Padding convention applied to the final output.
    pub fn padding(&self) -> ZeroPadding {
        self.padding
    }

    /// Returns the underlying hash function.
    pub fn hashfunction(&self) -> &H {
        &self.hash
    }

    /// Evaluates the oracle on `input`.
    pub fn hash(&self, input: &[u8]) -> Vec<u8> {
        let mut digest = self.digest();
        digest.update(input);
        digest.finalize()
    }

    /// Starts an incremental evaluation.
    pub fn digest(&self) -> OracleDigest<'_, H> {
        let mut inner = self.hash.new_digest();
        inner.update(&self.output_bits.to_be_bytes());
        OracleDigest {
            oracle: self,
            inner,
        }
    }
}

/// Incremental oracle evaluation; feeding the input in pieces gives the same
/// output as a single [`RandomOracle::hash`] call.
pub struct OracleDigest<'a, H: Hashfunction> {
    oracle: &'a RandomOracle<H>,
    inner: Box<dyn vtv_core::hash::DynDigest>,
}

impl<H: Hashfunction> OracleDigest<'_, H> {
    /// Appends `data` to the oracle input.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Consumes the digest and returns the oracle output.
    pub fn finalize(self) -> Vec<u8> {
        let oracle = self.oracle;
        let seed = self.inner.finalize();
        let mut prg = HashPrg::from_digest(&oracle.hash, &seed);
        let mut output = vec![0u8; oracle.output_len()];
        prg.fill_bytes(&mut output);
        oracle.padding.apply(&mut output, oracle.output_bits);
        output
    }
}

impl<H: Hashfunction> fmt::Debug for OracleDigest<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OracleDigest")
            .field("hash", &self.oracle.hash.name())
            .field("output_bits", &self.oracle.output_bits)
            .finish_non_exhaustive()
    }
}
