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

//! Print the `Authorization` header for a request.
//!
//! ```shell
//! AWS_ACCESS_KEY_ID=... AWS_SECRET_ACCESS_KEY=... \
//!     cargo run --example sign -- GET /bucket/key [headers-file]
//! ```
//!
//! The optional headers file holds one `Name: Value` per line.

use std::env;
use std::fs;

use http::Method;
use s3sign_aws_v2::{parse_header_lines, CanonicalRequest, DefaultCredentialProvider, RequestSigner};
use s3sign_core::time::{format_http_date, now};
use s3sign_core::{Context, OsEnv, OsFileRead, ProvideCredential};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let (Some(method), Some(resource)) = (args.next(), args.next()) else {
        anyhow::bail!("usage: sign <METHOD> <RESOURCE> [HEADERS_FILE]");
    };
    let headers = match args.next() {
        Some(path) => parse_header_lines(&fs::read_to_string(path)?),
        None => Vec::new(),
    };

    let ctx = Context::new().with_file_read(OsFileRead).with_env(OsEnv);
    let Some(cred) = DefaultCredentialProvider::new().provide_credential(&ctx)? else {
        anyhow::bail!("no credential found");
    };
    cred.validate()?;

    let req = CanonicalRequest::new(method.parse::<Method>()?, resource)
        .with_date(format_http_date(now()))
        .with_headers(headers);

    println!("Date: {}", req.date);
    println!("Authorization: {}", RequestSigner::new().sign(&cred, &req)?);
    Ok(())
}
