//! Byte-ring random source shared by every probabilistic decision
//!
//! The ring is filled once from a conventional PRNG and then replayed
//! cyclically. Every primitive on [`SimRng`] consumes exactly one byte, except
//! [`SimRng::next_bool`], which consumes one byte per eight calls.

use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use thiserror::Error;

/// Ring length used unless configured otherwise
pub const DEFAULT_RING_SIZE: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RngError {
    #[error("ring size {0} is not a non-zero power of two")]
    InvalidRingSize(usize),
    #[error("a scripted byte source needs at least one byte")]
    EmptyScript,
}

/// Fixed buffer of pre-generated bytes read through a wrapping cursor
#[derive(Clone)]
pub struct ByteRing {
    bytes: Box<[u8]>,
    cursor: usize,
}

impl ByteRing {
    /// Fill `size` bytes from a Xoshiro256** stream seeded with `seed`
    pub fn seeded(seed: u64, size: usize) -> Result<Self, RngError> {
        Self::fill_from(Xoshiro256StarStar::seed_from_u64(seed), size)
    }

    /// [`DEFAULT_RING_SIZE`] bytes seeded with `seed`
    pub fn seeded_default(seed: u64) -> Self {
        Self::fill_unchecked(Xoshiro256StarStar::seed_from_u64(seed), DEFAULT_RING_SIZE)
    }

    /// Fill `size` bytes from any generator. `size` must be a power of two.
    pub fn fill_from<R: RngCore>(rng: R, size: usize) -> Result<Self, RngError> {
        Self::check_size(size)?;
        Ok(Self::fill_unchecked(rng, size))
    }

    /// Ring lengths must be non-zero powers of two
    pub fn check_size(size: usize) -> Result<(), RngError> {
        if size == 0 || !size.is_power_of_two() {
            return Err(RngError::InvalidRingSize(size));
        }
        Ok(())
    }

    fn fill_unchecked<R: RngCore>(mut rng: R, size: usize) -> Self {
        let mut bytes = vec![0u8; size];
        rng.fill_bytes(&mut bytes);
        Self {
            bytes: bytes.into_boxed_slice(),
            cursor: 0,
        }
    }

    /// Replay `script` forever, starting at its first byte
    pub fn scripted(script: &[u8]) -> Result<Self, RngError> {
        if script.is_empty() {
            return Err(RngError::EmptyScript);
        }
        Ok(Self {
            bytes: script.into(),
            cursor: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn next_byte(&mut self) -> u8 {
        let byte = self.bytes[self.cursor];
        self.cursor += 1;
        if self.cursor == self.bytes.len() {
            self.cursor = 0;
        }
        byte
    }
}

impl std::fmt::Debug for ByteRing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteRing")
            .field("len", &self.bytes.len())
            .field("cursor", &self.cursor)
            .finish()
    }
}

/// Weighted-choice helpers over a [`ByteRing`]
#[derive(Debug, Clone)]
pub struct SimRng {
    ring: ByteRing,
    bit_cache: u8,
    bits_left: u8,
}

impl SimRng {
    pub fn new(ring: ByteRing) -> Self {
        Self {
            ring,
            bit_cache: 0,
            bits_left: 0,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(ByteRing::seeded_default(seed))
    }

    pub fn scripted(script: &[u8]) -> Result<Self, RngError> {
        ByteRing::scripted(script).map(Self::new)
    }

    pub fn ring(&self) -> &ByteRing {
        &self.ring
    }

    #[inline]
    pub fn next_byte(&mut self) -> u8 {
        self.ring.next_byte()
    }

    /// One bit of a cached byte, low bit first
    #[inline]
    pub fn next_bool(&mut self) -> bool {
        if self.bits_left == 0 {
            self.bit_cache = self.ring.next_byte();
            self.bits_left = 8;
        }
        let bit = self.bit_cache & 1 != 0;
        self.bit_cache >>= 1;
        self.bits_left -= 1;
        bit
    }

    /// True with probability `p/256`; `p == 255` always succeeds
    #[inline]
    pub fn chance256(&mut self, p: u8) -> bool {
        let byte = self.ring.next_byte();
        p == u8::MAX || byte < p
    }

    /// 0 below `t0`, 1 below `t1`, else 2
    #[inline]
    pub fn pick3(&mut self, t0: u8, t1: u8) -> u8 {
        let byte = self.ring.next_byte();
        if byte < t0 {
            0
        } else if byte < t1 {
            1
        } else {
            2
        }
    }

    /// 0 below `t0`, 1 below `t1`, 2 below `t2`, else 3
    #[inline]
    pub fn pick4(&mut self, t0: u8, t1: u8, t2: u8) -> u8 {
        let byte = self.ring.next_byte();
        if byte < t0 {
            0
        } else if byte < t1 {
            1
        } else if byte < t2 {
            2
        } else {
            3
        }
    }

    /// Roughly uniform 0, 1 or 2
    #[inline]
    pub fn pick012(&mut self) -> u8 {
        self.pick3(85, 170)
    }

    /// Uniform 0..=3
    #[inline]
    pub fn pick0123(&mut self) -> u8 {
        self.pick4(64, 128, 192)
    }
}
