// SPDX-FileCopyrightText: Copyright © 2020-2024 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use xxhash_rust::xxh3::Xxh3;

use super::{Checksum64, Digest};

impl Checksum64 for Xxh3 {
    fn update(&mut self, data: &[u8]) {
        Xxh3::update(self, data);
    }

    fn checksum64(&self) -> u64 {
        Xxh3::digest(self)
    }
}

impl Digest for Xxh3 {
    fn update(&mut self, data: &[u8]) {
        Xxh3::update(self, data);
    }

    fn digest(&self) -> Vec<u8> {
        Xxh3::digest(self).to_be_bytes().to_vec()
    }
}
