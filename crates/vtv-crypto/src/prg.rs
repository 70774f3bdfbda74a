//! Counter-mode PRG over a [`Hashfunction`].

use std::fmt;

use vtv_core::{HashAlgorithm, Hashfunction, Prg, VtvError};

/// Width of the big-endian block counter appended to the seed state.
const COUNTER_BYTES: usize = 4;

/// Pseudorandom generator expanding a seed by hashing it with a counter.
///
/// Block `c` of the stream is `H(state || be32(c))`, where `state` is the seed
/// folded down to one digest length. Bytes are served from the current block
/// and a new block is hashed only when the previous one is exhausted.
pub struct HashPrg<H: Hashfunction = HashAlgorithm> {
    hash: H,
    /// Folded seed followed by the counter slot.
    input: Vec<u8>,
    counter: u32,
    block: Vec<u8>,
    position: usize,
}

impl<H: Hashfunction> HashPrg<H> {
    /// Creates a generator seeded with `seed`.
    pub fn new(hash: H, seed: &[u8]) -> Result<Self, VtvError> {
        let mut prg = Self::unseeded(hash);
        prg.set_seed(seed)?;
        Ok(prg)
    }

    /// Seeds from a digest of the same hash function, which always has the
    /// minimum length.
    pub(crate) fn from_digest(hash: H, digest: &[u8]) -> Self {
        let mut prg = Self::unseeded(hash);
        prg.load_seed(digest);
        prg
    }

    fn unseeded(hash: H) -> Self {
        Self {
            hash,
            input: Vec::new(),
            counter: 0,
            block: Vec::new(),
            position: 0,
        }
    }

    /// Returns the underlying hash function.
    pub fn hashfunction(&self) -> &H {
        &self.hash
    }

    /// Number of digest blocks hashed since the last reseed.
    pub fn blocks_generated(&self) -> u32 {
        self.counter
    }

    fn load_seed(&mut self, seed: &[u8]) {
        let width = self.hash.digest_len();
        self.input = fold_seed(seed, width);
        self.input.resize(width + COUNTER_BYTES, 0);
        self.counter = 0;
        self.block.clear();
        self.position = 0;
    }

    fn next_block(&mut self) {
        let width = self.input.len() - COUNTER_BYTES;
        self.input[width..].copy_from_slice(&self.counter.to_be_bytes());
        self.block = self.hash.digest(&self.input);
        self.position = 0;
        self.counter = self.counter.wrapping_add(1);
    }
}

impl<H: Hashfunction> Prg for HashPrg<H> {
    fn min_seed_bytes(&self) -> usize {
        self.hash.digest_len()
    }

    fn set_seed(&mut self, seed: &[u8]) -> Result<(), VtvError> {
        let minimum = self.min_seed_bytes();
        if seed.len() < minimum {
            return Err(VtvError::seed_too_short(minimum, seed.len()));
        }
        self.load_seed(seed);
        Ok(())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut index = 0;
        while index < dest.len() {
            if self.position == self.block.len() {
                self.next_block();
            }
            let len = (dest.len() - index).min(self.block.len() - self.position);
            dest[index..index + len]
                .copy_from_slice(&self.block[self.position..self.position + len]);
            self.position += len;
            index += len;
        }
    }
}

impl<H: Hashfunction> fmt::Debug for HashPrg<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashPrg")
            .field("hash", &self.hash.name())
            .field("blocks_generated", &self.counter)
            .finish_non_exhaustive()
    }
}

/// XORs `seed` circularly into a zeroed buffer of `width` bytes.
fn fold_seed(seed: &[u8], width: usize) -> Vec<u8> {
    let mut state = vec![0u8; width];
    for (index, byte) in seed.iter().enumerate() {
        state[index % width] ^= byte;
    }
    state
}
