// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! HMAC built from a bare [`OneWayHash`].
//!
//! - [RFC 2104: HMAC: Keyed-Hashing for Message Authentication](https://www.rfc-editor.org/rfc/rfc2104)

use std::fmt::{Debug, Formatter};

use crate::hash::OneWayHash;
use crate::{Error, Result};

/// Internal block size of the supported hash primitives.
pub const BLOCK_SIZE: usize = 64;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// What to do with a secret key longer than [`BLOCK_SIZE`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OversizedKeyPolicy {
    /// Replace the key with its digest, as RFC 2104 specifies.
    #[default]
    Shorten,
    /// Refuse the key with [`crate::ErrorKind::KeyUnsupported`].
    Reject,
}

/// A secret key padded (or shortened) to exactly one hash block.
pub struct NormalizedKey([u8; BLOCK_SIZE]);

impl NormalizedKey {
    /// Borrow the normalized bytes.
    pub fn as_bytes(&self) -> &[u8; BLOCK_SIZE] {
        &self.0
    }

    fn xor(&self, pad: u8) -> [u8; BLOCK_SIZE] {
        let mut out = self.0;
        for b in out.iter_mut() {
            *b ^= pad;
        }
        out
    }
}

impl Debug for NormalizedKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("NormalizedKey(***)")
    }
}

impl Drop for NormalizedKey {
    fn drop(&mut self) {
        self.0.fill(0);
    }
}

/// Normalize an arbitrary length secret into a block sized key.
///
/// - Shorter keys are right padded with zeros.
/// - Keys of exactly [`BLOCK_SIZE`] are used as is.
/// - Longer keys are hashed first, then padded, unless `policy` is
///   [`OversizedKeyPolicy::Reject`].
pub fn normalize_key(
    secret: &[u8],
    hash: &dyn OneWayHash,
    policy: OversizedKeyPolicy,
) -> Result<NormalizedKey> {
    let mut key = [0u8; BLOCK_SIZE];

    if secret.len() <= BLOCK_SIZE {
        key[..secret.len()].copy_from_slice(secret);
        return Ok(NormalizedKey(key));
    }

    if policy == OversizedKeyPolicy::Reject {
        return Err(Error::key_unsupported(format!(
            "secret key is {} bytes, longer than the {BLOCK_SIZE} bytes block",
            secret.len()
        )));
    }

    let digest = checked_digest(hash, secret)?;
    key[..digest.len()].copy_from_slice(&digest);
    Ok(NormalizedKey(key))
}

/// Compute `H((K ^ opad) || H((K ^ ipad) || message))`.
pub fn hmac(key: &NormalizedKey, message: &[u8], hash: &dyn OneWayHash) -> Result<Vec<u8>> {
    let mut inner = Vec::with_capacity(BLOCK_SIZE + message.len());
    inner.extend_from_slice(&key.xor(IPAD));
    inner.extend_from_slice(message);
    let inner_digest = checked_digest(hash, &inner)?;

    let mut outer = Vec::with_capacity(BLOCK_SIZE + inner_digest.len());
    outer.extend_from_slice(&key.xor(OPAD));
    outer.extend_from_slice(&inner_digest);
    checked_digest(hash, &outer)
}

/// Digest content and make sure the primitive returned what it promised.
fn checked_digest(hash: &dyn OneWayHash, content: &[u8]) -> Result<Vec<u8>> {
    let digest = hash.digest(content)?;
    if digest.len() != hash.output_size() || digest.len() > BLOCK_SIZE {
        return Err(Error::environment_invalid(format!(
            "hash primitive {hash:?} returned {} bytes, expected {}",
            digest.len(),
            hash.output_size()
        )));
    }
    Ok(digest)
}
