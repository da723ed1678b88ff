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

use std::sync::Arc;

use log::debug;
use s3sign_core::{Context, Error, ProvideCredential, Result};

use crate::{Config, Credential};

/// FileCredentialProvider reads the secret access key from a file.
///
/// The access key id and the file path come from [`Config`], falling back to
/// `AWS_ACCESS_KEY_ID` and `S3SIGN_SECRET_KEY_FILE`. The file holds the raw
/// key; one trailing newline is stripped, nothing else is.
#[derive(Debug)]
pub struct FileCredentialProvider {
    config: Arc<Config>,
}

impl Default for FileCredentialProvider {
    fn default() -> Self {
        Self::new(Arc::new(Config::default()))
    }
}

impl FileCredentialProvider {
    /// Create a new `FileCredentialProvider` instance.
    pub fn new(cfg: Arc<Config>) -> Self {
        Self { config: cfg }
    }
}

impl ProvideCredential for FileCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let cfg = self.config.as_ref().clone().from_env(ctx);
        let (Some(ak), Some(path)) = (cfg.access_key_id, cfg.secret_key_file) else {
            return Ok(None);
        };
        if path.trim().is_empty() {
            return Err(Error::config_invalid("secret key file path is empty"));
        }

        let path = ctx.expand_home_dir(&path).ok_or_else(|| {
            Error::environment_invalid(format!("home dir is required to expand {path}"))
        })?;
        debug!("loading secret access key from {path}");

        let content = ctx.file_read(&path)?;
        let content = String::from_utf8(content).map_err(|err| {
            Error::credential_invalid(format!("secret key file {path} is not valid utf-8"))
                .with_source(err)
        })?;
        let secret = strip_trailing_newline(&content);

        let cred = Credential {
            access_key_id: ak,
            secret_access_key: secret.to_string(),
            session_token: cfg.session_token,
        };
        cred.validate()?;

        Ok(Some(cred))
    }
}

fn strip_trailing_newline(s: &str) -> &str {
    s.strip_suffix("\r\n")
        .or_else(|| s.strip_suffix('\n'))
        .unwrap_or(s)
}
