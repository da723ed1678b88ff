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

use crate::provide_credential::{
    ConfigCredentialProvider, EnvCredentialProvider, FileCredentialProvider,
};
use crate::{Config, Credential};
use s3sign_core::{Context, ProvideCredential, ProvideCredentialChain, Result};

/// DefaultCredentialProvider tries, in order:
///
/// - keys set on [`Config`]
/// - `AWS_ACCESS_KEY_ID` and `AWS_SECRET_ACCESS_KEY`
/// - the secret key file named by [`Config`] or `S3SIGN_SECRET_KEY_FILE`
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultCredentialProvider {
    /// Create a new `DefaultCredentialProvider` instance.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create with the given config consulted first.
    pub fn with_config(cfg: Config) -> Self {
        let cfg = Arc::new(cfg);
        let chain = ProvideCredentialChain::new()
            .push(ConfigCredentialProvider::new(cfg.clone()))
            .push(EnvCredentialProvider::new())
            .push(FileCredentialProvider::new(cfg));

        Self { chain }
    }

    /// Create with a custom credential chain.
    pub fn with_chain(chain: ProvideCredentialChain<Credential>) -> Self {
        Self { chain }
    }

    /// Add a provider to be tried before all others.
    pub fn push_front(mut self, provider: impl ProvideCredential<Credential = Credential>) -> Self {
        self.chain = self.chain.push_front(provider);
        self
    }
}

impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx)
    }
}
