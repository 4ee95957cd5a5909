// SPDX-FileCopyrightText: Copyright © 2020-2024 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use digest::DynDigest;

use super::Digest;

macro_rules! impl_digest {
    ($($hasher:ty),+ $(,)?) => {
        $(
            impl Digest for $hasher {
                fn update(&mut self, data: &[u8]) {
                    digest::Digest::update(self, data);
                }

                fn digest(&self) -> Vec<u8> {
                    digest::Digest::finalize(self.clone()).to_vec()
                }
            }
        )+
    };
}

impl_digest!(
    md5::Md5,
    sha1::Sha1,
    sha2::Sha224,
    sha2::Sha256,
    sha2::Sha384,
    sha2::Sha512,
);

/// Algorithm picked at runtime
impl Digest for Box<dyn DynDigest> {
    fn update(&mut self, data: &[u8]) {
        DynDigest::update(self.as_mut(), data);
    }

    fn digest(&self) -> Vec<u8> {
        self.box_clone().finalize().into_vec()
    }
}
