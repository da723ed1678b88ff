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

use std::fmt::{Debug, Formatter};

use s3sign_core::{utils::Redact, Error, Result, SigningCredential};

use crate::constants::SECRET_KEY_LENGTH;

/// Credential for aws signature version 2.
#[derive(Clone, Default)]
pub struct Credential {
    /// Access key id for aws
    pub access_key_id: String,
    /// Secret access key for aws
    pub secret_access_key: String,
    /// Session token for temporary credentials, sent as `x-amz-security-token`.
    pub session_token: Option<String>,
}

impl Credential {
    /// Create a new credential.
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: None,
        }
    }

    /// Set session token.
    pub fn with_session_token(mut self, session_token: impl Into<String>) -> Self {
        self.session_token = Some(session_token.into());
        self
    }

    /// Check this credential can be used to sign requests.
    ///
    /// AWS secret access keys are always [`SECRET_KEY_LENGTH`] bytes, anything
    /// else is almost certainly a truncated or mangled key.
    pub fn validate(&self) -> Result<()> {
        if self.access_key_id.is_empty() {
            return Err(Error::credential_invalid("access key id is empty"));
        }

        let len = self.secret_access_key.len();
        if len != SECRET_KEY_LENGTH {
            return Err(Error::credential_invalid(format!(
                "secret access key must be {SECRET_KEY_LENGTH} bytes, got {len} bytes"
            )));
        }

        Ok(())
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field(
                "session_token",
                &self.session_token.as_ref().map(Redact::from),
            )
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
