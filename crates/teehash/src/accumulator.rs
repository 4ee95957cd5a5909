// SPDX-FileCopyrightText: Copyright © 2020-2024 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use std::fmt;

use strum::Display;

#[cfg(feature = "crc")]
mod crc;
#[cfg(feature = "rustcrypto")]
mod rustcrypto;
#[cfg(feature = "xxh3")]
mod xxh3;

/// Accumulator producing a digest whose length depends on the algorithm
pub trait Digest {
    fn update(&mut self, data: &[u8]);

    /// Digest of every byte fed so far. Must not reset or consume
    /// the accumulator state.
    fn digest(&self) -> Vec<u8>;
}

/// Accumulator producing a fixed 32-bit checksum
pub trait Checksum32 {
    fn update(&mut self, data: &[u8]);

    fn checksum32(&self) -> u32;
}

/// Accumulator producing a fixed 64-bit checksum
pub trait Checksum64 {
    fn update(&mut self, data: &[u8]);

    fn checksum64(&self) -> u64;
}

/// Which kind of accumulator a [`crate::TeeHasher`] was bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Shape {
    Digest,
    Checksum32,
    Checksum64,
}

/// Exactly one borrowed accumulator, tagged by shape
pub enum Accumulator<'a> {
    Digest(&'a mut dyn Digest),
    Checksum32(&'a mut dyn Checksum32),
    Checksum64(&'a mut dyn Checksum64),
}

impl Accumulator<'_> {
    pub fn shape(&self) -> Shape {
        match self {
            Accumulator::Digest(_) => Shape::Digest,
            Accumulator::Checksum32(_) => Shape::Checksum32,
            Accumulator::Checksum64(_) => Shape::Checksum64,
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        match self {
            Accumulator::Digest(hasher) => hasher.update(data),
            Accumulator::Checksum32(hasher) => hasher.update(data),
            Accumulator::Checksum64(hasher) => hasher.update(data),
        }
    }

    pub fn sum(&self) -> Sum {
        match self {
            Accumulator::Digest(hasher) => Sum::Digest(hasher.digest()),
            Accumulator::Checksum32(hasher) => Sum::Checksum32(hasher.checksum32()),
            Accumulator::Checksum64(hasher) => Sum::Checksum64(hasher.checksum64()),
        }
    }
}

impl fmt::Debug for Accumulator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Accumulator").field(&self.shape()).finish()
    }
}

/// Result of querying an accumulator, shaped like the accumulator itself
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sum {
    Digest(Vec<u8>),
    Checksum32(u32),
    Checksum64(u64),
}

impl Sum {
    pub fn shape(&self) -> Shape {
        match self {
            Sum::Digest(_) => Shape::Digest,
            Sum::Checksum32(_) => Shape::Checksum32,
            Sum::Checksum64(_) => Shape::Checksum64,
        }
    }

    /// Raw bytes, checksums in big endian
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Sum::Digest(bytes) => bytes.clone(),
            Sum::Checksum32(sum) => sum.to_be_bytes().to_vec(),
            Sum::Checksum64(sum) => sum.to_be_bytes().to_vec(),
        }
    }
}

impl fmt::Display for Sum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.to_bytes()))
    }
}
