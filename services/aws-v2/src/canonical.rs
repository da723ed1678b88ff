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

//! Canonical request of AWS signature version 2.
//!
//! - [Signing and authenticating REST requests](https://docs.aws.amazon.com/AmazonS3/latest/userguide/RESTAuthentication.html)

use std::collections::BTreeMap;
use std::fmt::Write;

use http::Method;
use log::debug;
use s3sign_core::time::{format_http_date, DateTime};
use s3sign_core::{Error, Result};

use crate::constants::*;

/// Methods S3 accepts v2 signatures for.
const SUPPORTED_METHODS: [Method; 5] = [
    Method::GET,
    Method::PUT,
    Method::POST,
    Method::DELETE,
    Method::HEAD,
];

/// A custom header attached to the request.
///
/// Names are case-insensitive and not assumed to be unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmzHeader {
    name: String,
    value: String,
}

impl AmzHeader {
    /// Create a new header.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Parse a `Name: Value` line.
    ///
    /// Returns `None` unless the line contains exactly one `": "` separator.
    pub fn parse(line: &str) -> Option<Self> {
        let (name, value) = line.split_once(": ")?;
        if value.contains(": ") {
            return None;
        }

        Some(Self::new(name, value))
    }

    /// Header name as given.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Header value as given.
    pub fn value(&self) -> &str {
        &self.value
    }

    fn is_amz(&self) -> bool {
        self.name
            .get(..X_AMZ_PREFIX.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(X_AMZ_PREFIX))
    }

    fn is_malformed(&self) -> bool {
        self.name.is_empty() || self.name.contains(':')
    }
}

/// Parse custom headers, one `Name: Value` per line.
///
/// Lines without exactly one `": "` separator are ignored.
pub fn parse_header_lines(content: &str) -> Vec<AmzHeader> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let header = AmzHeader::parse(line);
            if header.is_none() {
                debug!("ignoring malformed header line: {line:?}");
            }
            header
        })
        .collect()
}

/// Everything from a request that goes into the string to sign.
#[derive(Debug, Clone)]
pub struct CanonicalRequest {
    /// HTTP verb.
    pub method: Method,
    /// Base64 `Content-MD5` of the body, may be empty.
    pub content_md5: String,
    /// `Content-Type` of the body, may be empty.
    pub content_type: String,
    /// RFC 1123 date the request is sent with.
    pub date: String,
    /// Custom headers, only `x-amz-*` ones are signed.
    pub headers: Vec<AmzHeader>,
    /// Resource path starting with `/`, without scheme or host.
    pub resource: String,
}

impl CanonicalRequest {
    /// Create a request for `resource` with empty digest, type and date.
    pub fn new(method: Method, resource: impl Into<String>) -> Self {
        Self {
            method,
            content_md5: String::new(),
            content_type: String::new(),
            date: String::new(),
            headers: Vec::new(),
            resource: resource.into(),
        }
    }

    /// Set the content md5.
    pub fn with_content_md5(mut self, content_md5: impl Into<String>) -> Self {
        self.content_md5 = content_md5.into();
        self
    }

    /// Set the content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Set the date string verbatim.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Set the date from a timestamp, formatted as RFC 1123 in UTC.
    pub fn with_time(self, time: DateTime) -> Self {
        self.with_date(format_http_date(time))
    }

    /// Append a custom header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push(AmzHeader::new(name, value));
        self
    }

    /// Append custom headers.
    pub fn with_headers(mut self, headers: impl IntoIterator<Item = AmzHeader>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Check the request can be signed.
    pub fn validate(&self) -> Result<()> {
        if !SUPPORTED_METHODS.contains(&self.method) {
            return Err(Error::request_invalid(format!(
                "method {} is not supported",
                self.method
            )));
        }

        if self.resource.starts_with("http://") || self.resource.starts_with("https://") {
            return Err(Error::request_invalid(format!(
                "resource {} must be a path, not an url",
                self.resource
            )));
        }
        if !self.resource.starts_with('/') {
            return Err(Error::request_invalid(format!(
                "resource {} must start with '/'",
                self.resource
            )));
        }

        if self
            .headers
            .iter()
            .any(|h| h.name.eq_ignore_ascii_case(X_AMZ_DATE))
        {
            return Err(Error::request_invalid(
                "x-amz-date is not allowed, the timestamp is sent via the Date header",
            ));
        }

        if self.date.is_empty() {
            return Err(Error::request_invalid("date is required"));
        }

        Ok(())
    }

    /// Construct string to sign
    ///
    /// ## Format
    ///
    /// ```text
    /// VERB + "\n" +
    /// Content-MD5 + "\n" +
    /// Content-Type + "\n" +
    /// Date + "\n" +
    /// CanonicalizedAmzHeaders +
    /// CanonicalizedResource;
    /// ```
    pub fn string_to_sign(&self) -> Result<String> {
        self.validate()?;

        let mut s = String::new();
        writeln!(&mut s, "{}", self.method.as_str())?;
        writeln!(&mut s, "{}", self.content_md5)?;
        writeln!(&mut s, "{}", self.content_type)?;
        writeln!(&mut s, "{}", self.date)?;
        s.write_str(&canonicalize_headers(&self.headers))?;
        s.write_str(&canonicalize_resource(&self.resource))?;

        debug!("string to sign: {:?}", &s);
        Ok(s)
    }
}

/// Render `x-amz-*` headers, one `name:value\n` line per distinct name.
///
/// Names are lower-cased and sorted. Values of repeated names are joined by
/// `,` in the order they were given, as RFC 2616 section 4.2 allows.
fn canonicalize_headers(headers: &[AmzHeader]) -> String {
    let mut amz: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    for h in headers.iter().filter(|h| h.is_amz()) {
        if h.is_malformed() {
            debug!("ignoring malformed header: {h:?}");
            continue;
        }

        amz.entry(h.name.to_ascii_lowercase())
            .or_default()
            .push(&h.value);
    }

    let mut s = String::new();
    for (name, values) in amz {
        s.push_str(&name);
        s.push(':');
        s.push_str(&values.join(","));
        s.push('\n');
    }
    s
}

/// Strip the query unless it is exactly one of [`SUBRESOURCES`].
fn canonicalize_resource(resource: &str) -> String {
    match resource.split_once('?') {
        Some((path, query)) if SUBRESOURCES.contains(&query) => format!("{path}?{query}"),
        Some((path, _)) => path.to_string(),
        None => resource.to_string(),
    }
}
