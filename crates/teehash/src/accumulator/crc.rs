// SPDX-FileCopyrightText: Copyright © 2020-2024 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

//! CRC accumulators
//!
//! [`crc32fast::Hasher`] covers CRC-32 (IEEE). [`crc_fast::Digest`] covers the
//! 64-bit catalogue, e.g. [`crc_fast::CrcAlgorithm::Crc64GoIso`] for CRC-64 ISO
//! and [`crc_fast::CrcAlgorithm::Crc64Xz`] for the reflected CRC-64 ECMA.
//! Through the [`Digest`] path both yield their big endian bytes.

use super::{Checksum32, Checksum64, Digest};

impl Checksum32 for crc32fast::Hasher {
    fn update(&mut self, data: &[u8]) {
        crc32fast::Hasher::update(self, data);
    }

    fn checksum32(&self) -> u32 {
        self.clone().finalize()
    }
}

impl Digest for crc32fast::Hasher {
    fn update(&mut self, data: &[u8]) {
        crc32fast::Hasher::update(self, data);
    }

    fn digest(&self) -> Vec<u8> {
        self.checksum32().to_be_bytes().to_vec()
    }
}

impl Checksum64 for crc_fast::Digest {
    fn update(&mut self, data: &[u8]) {
        crc_fast::Digest::update(self, data);
    }

    fn checksum64(&self) -> u64 {
        self.finalize()
    }
}

impl Digest for crc_fast::Digest {
    fn update(&mut self, data: &[u8]) {
        crc_fast::Digest::update(self, data);
    }

    fn digest(&self) -> Vec<u8> {
        self.finalize().to_be_bytes().to_vec()
    }
}
