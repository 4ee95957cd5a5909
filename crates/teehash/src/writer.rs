// SPDX-FileCopyrightText: Copyright © 2020-2024 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use std::io::{self, Write};

use log::{trace, warn};
use thiserror::Error;

use crate::accumulator::{Accumulator, Checksum32, Checksum64, Digest, Shape, Sum};

/// Transparent [`Write`] adapter feeding every byte accepted by the
/// inner writer into a hash accumulator
///
/// The inner writer is always written first and the accumulator only
/// sees the bytes it accepted, so both legs stay in lock step across
/// short writes and errors.
pub struct TeeHasher<'a, W: Write> {
    inner: W,
    accumulator: Accumulator<'a>,
    bytes: u64,
}

impl<'a, W> TeeHasher<'a, W>
where
    W: Write,
{
    pub fn new(writer: W, accumulator: Accumulator<'a>) -> Self {
        Self {
            inner: writer,
            accumulator,
            bytes: 0,
        }
    }

    pub fn with_digest(writer: W, hasher: &'a mut impl Digest) -> Self {
        Self::new(writer, Accumulator::Digest(hasher))
    }

    pub fn with_checksum32(writer: W, hasher: &'a mut impl Checksum32) -> Self {
        Self::new(writer, Accumulator::Checksum32(hasher))
    }

    pub fn with_checksum64(writer: W, hasher: &'a mut impl Checksum64) -> Self {
        Self::new(writer, Accumulator::Checksum64(hasher))
    }

    pub fn shape(&self) -> Shape {
        self.accumulator.shape()
    }

    /// Total bytes delivered to both the writer and the accumulator
    pub fn bytes_written(&self) -> u64 {
        self.bytes
    }

    /// Digest of everything written so far
    pub fn digest(&self) -> Result<Vec<u8>, Error> {
        match &self.accumulator {
            Accumulator::Digest(hasher) => Ok(hasher.digest()),
            other => Err(mismatch(Shape::Digest, other.shape())),
        }
    }

    pub fn checksum32(&self) -> Result<u32, Error> {
        match &self.accumulator {
            Accumulator::Checksum32(hasher) => Ok(hasher.checksum32()),
            other => Err(mismatch(Shape::Checksum32, other.shape())),
        }
    }

    pub fn checksum64(&self) -> Result<u64, Error> {
        match &self.accumulator {
            Accumulator::Checksum64(hasher) => Ok(hasher.checksum64()),
            other => Err(mismatch(Shape::Checksum64, other.shape())),
        }
    }

    /// Query whichever accumulator is bound
    pub fn sum(&self) -> Sum {
        self.accumulator.sum()
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W> Write for TeeHasher<'_, W>
where
    W: Write,
{
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf).inspect_err(|error| {
            trace!("inner writer failed after {} bytes: {error}", self.bytes);
        })?;

        if written < buf.len() {
            trace!("short write: {written} of {} bytes accepted", buf.len());
        }

        self.accumulator.update(&buf[..written]);
        self.bytes += written as u64;

        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

fn mismatch(requested: Shape, bound: Shape) -> Error {
    warn!("requested {requested} from a {bound} accumulator");
    Error::ShapeMismatch { requested, bound }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("accumulator shape mismatch: requested {requested}, bound {bound}")]
    ShapeMismatch { requested: Shape, bound: Shape },
}
