//! `rand` interoperability for seeded generators.

use rand::RngCore;
use vtv_core::Prg;

/// Exposes any [`Prg`] as a [`RngCore`].
///
/// `next_u32` and `next_u64` consume four and eight stream bytes and decode
/// them little-endian, so the adapter never skips stream bytes.
#[derive(Debug, Clone)]
pub struct PrgRng<P> {
    prg: P,
}

impl<P: Prg> PrgRng<P> {
    /// Wraps a seeded generator.
    pub fn new(prg: P) -> Self {
        Self { prg }
    }

    /// Returns a mutable reference to the wrapped generator.
    pub fn inner_mut(&mut self) -> &mut P {
        &mut self.prg
    }

    /// Unwraps the generator, keeping its stream position.
    pub fn into_inner(self) -> P {
        self.prg
    }
}

impl<P: Prg> RngCore for PrgRng<P> {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.prg.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.prg.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.prg.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.prg.fill_bytes(dest);
        Ok(())
    }
}
