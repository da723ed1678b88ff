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

//! Core components for signing S3 requests.
//!
//! This crate provides the foundational types and traits the service crates
//! build on.
//!
//! ## Overview
//!
//! - **Signing engine**: [`mac`] normalizes a secret key to one hash block and
//!   computes an HMAC from a bare [`hash::OneWayHash`] primitive.
//! - **Context**: A container that holds implementations for file reading and environment access
//! - **Traits**: Abstract interfaces for credential loading (`ProvideCredential`) and request signing (`SignRequest`)
//! - **Signer**: The orchestrator that coordinates credential loading and request signing
//!
//! ## Example
//!
//! ```
//! use s3sign_core::hash::{base64_encode, Sha1Hash};
//! use s3sign_core::mac::{hmac, normalize_key, OversizedKeyPolicy};
//!
//! # fn main() -> s3sign_core::Result<()> {
//! let key = normalize_key(b"Jefe", &Sha1Hash, OversizedKeyPolicy::Shorten)?;
//! let digest = hmac(&key, b"what do ya want for nothing?", &Sha1Hash)?;
//! assert_eq!(base64_encode(&digest), "7/zfauXrL6LSdBbV8YTfnCWafHk=");
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Hash primitives and base64 helpers
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod mac;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorCategory, ErrorKind, Result};

mod context;
pub use context::{Context, Env, FileRead, NoopEnv, NoopFileRead, OsEnv, OsFileRead, StaticEnv};

mod api;
pub use api::{ProvideCredential, ProvideCredentialChain, SignRequest, SigningCredential};
mod signer;
pub use signer::Signer;
