// SPDX-FileCopyrightText: Copyright © 2020-2024 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

//! Forward writes to an inner [`std::io::Write`] while feeding the very same
//! bytes into a hash accumulator, so the digest of the written stream is
//! available without buffering or re-reading it.
//!
//! ```
//! use std::io::Write;
//!
//! use teehash::{Checksum32, TeeHasher};
//!
//! /// Sums every byte, wrapping
//! #[derive(Default)]
//! struct ByteSum(u32);
//!
//! impl Checksum32 for ByteSum {
//!     fn update(&mut self, data: &[u8]) {
//!         for byte in data {
//!             self.0 = self.0.wrapping_add(u32::from(*byte));
//!         }
//!     }
//!
//!     fn checksum32(&self) -> u32 {
//!         self.0
//!     }
//! }
//!
//! let mut sink: Vec<u8> = vec![];
//! let mut hasher = ByteSum::default();
//!
//! let mut writer = TeeHasher::with_checksum32(&mut sink, &mut hasher);
//! writer.write_all(&[1, 2, 3]).unwrap();
//!
//! assert_eq!(writer.checksum32().unwrap(), 6);
//! assert_eq!(sink, [1, 2, 3]);
//! ```

pub mod accumulator;
mod writer;

pub use self::accumulator::{Accumulator, Checksum32, Checksum64, Digest, Shape, Sum};
pub use self::writer::{Error, TeeHasher};
