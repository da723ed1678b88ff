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

//! Hash related utils.

use std::fmt::Debug;

use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use sha1::Digest;
use sha1::Sha1;

use crate::Result;

/// OneWayHash is the bare hash primitive the HMAC engine is built on.
///
/// Implementations only need to digest a whole byte slice at once. The
/// engine in [`crate::mac`] assumes a 64 bytes internal block, which holds
/// for SHA-1, SHA-256 and MD5.
pub trait OneWayHash: Debug + Send + Sync + 'static {
    /// Length of the digest in bytes.
    fn output_size(&self) -> usize;

    /// Digest the given content.
    ///
    /// Returns an error if the primitive can't be invoked.
    fn digest(&self, content: &[u8]) -> Result<Vec<u8>>;
}

/// SHA-1, the hash used by AWS Signature Version 2.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha1Hash;

impl OneWayHash for Sha1Hash {
    fn output_size(&self) -> usize {
        20
    }

    fn digest(&self, content: &[u8]) -> Result<Vec<u8>> {
        Ok(Sha1::digest(content).to_vec())
    }
}

/// Base64 encode
pub fn base64_encode(content: &[u8]) -> String {
    BASE64_STANDARD.encode(content)
}
