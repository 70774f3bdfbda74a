//! Hash function capability and the static registry of supported algorithms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
pub use sha2::digest::DynDigest;
use sha2::{Sha256, Sha384, Sha512};

use crate::errors::{ErrorInfo, VtvError};

/// Capability consumed by the PRG and the random oracle.
///
/// Implementations map arbitrary-length input to a digest of exactly
/// [`Hashfunction::digest_len`] bytes.
pub trait Hashfunction {
    /// Canonical identifier of the function, e.g. `SHA-256`.
    fn name(&self) -> &str;

    /// Digest length in bytes.
    fn digest_len(&self) -> usize;

    /// Starts a fresh incremental digest.
    fn new_digest(&self) -> Box<dyn DynDigest>;

    /// Hashes a single byte string.
    fn digest(&self, data: &[u8]) -> Vec<u8> {
        self.digest_parts(&[data])
    }

    /// Hashes the concatenation of `parts`.
    fn digest_parts(&self, parts: &[&[u8]]) -> Vec<u8> {
        let mut digest = self.new_digest();
        for part in parts {
            digest.update(part);
        }
        digest.finalize().into_vec()
    }
}

impl<H: Hashfunction + ?Sized> Hashfunction for &H {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn digest_len(&self) -> usize {
        (**self).digest_len()
    }

    fn new_digest(&self) -> Box<dyn DynDigest> {
        (**self).new_digest()
    }
}

/// Statically registered SHA-2 variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    /// SHA-256, 32 byte digests.
    #[serde(rename = "SHA-256")]
    Sha256,
    /// SHA-384, 48 byte digests.
    #[serde(rename = "SHA-384")]
    Sha384,
    /// SHA-512, 64 byte digests.
    #[serde(rename = "SHA-512")]
    Sha512,
}

impl HashAlgorithm {
    /// Every registered algorithm in canonical order.
    pub const ALL: [HashAlgorithm; 3] = [
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
    ];

    /// Canonical identifier used in documents and on the command line.
    pub const fn identifier(self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
        }
    }

    /// Resolves an identifier against the registry.
    ///
    /// Matching ignores ASCII case and an optional dash, so `SHA-256`,
    /// `sha256` and `Sha-256` all resolve to [`HashAlgorithm::Sha256`].
    pub fn resolve(identifier: &str) -> Result<Self, VtvError> {
        let normalized: String = identifier
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_uppercase())
            .collect();
        match normalized.as_str() {
            "SHA256" => Ok(HashAlgorithm::Sha256),
            "SHA384" => Ok(HashAlgorithm::Sha384),
            "SHA512" => Ok(HashAlgorithm::Sha512),
            _ => Err(VtvError::UnsupportedHashFunction(
                ErrorInfo::new("unknown-hash", "hash function is not registered")
                    .with_context("identifier", identifier)
                    .with_hint("supported identifiers: SHA-256, SHA-384, SHA-512"),
            )),
        }
    }
}

impl Hashfunction for HashAlgorithm {
    fn name(&self) -> &str {
        self.identifier()
    }

    fn digest_len(&self) -> usize {
        match self {
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }

    fn new_digest(&self) -> Box<dyn DynDigest> {
        match self {
            HashAlgorithm::Sha256 => Box::new(Sha256::default()),
            HashAlgorithm::Sha384 => Box::new(Sha384::default()),
            HashAlgorithm::Sha512 => Box::new(Sha512::default()),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = VtvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HashAlgorithm::resolve(s)
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
