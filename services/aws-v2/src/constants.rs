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

// Headers used in aws v2 signing.
pub const CONTENT_MD5: &str = "content-md5";
pub const X_AMZ_PREFIX: &str = "x-amz-";
pub const X_AMZ_DATE: &str = "x-amz-date";
pub const X_AMZ_SECURITY_TOKEN: &str = "x-amz-security-token";

// Env values used in aws v2 signing.
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const AWS_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";
pub const S3SIGN_SECRET_KEY_FILE: &str = "S3SIGN_SECRET_KEY_FILE";

/// Authorization scheme of AWS signature version 2.
pub const AUTHORIZATION_SCHEME: &str = "AWS";

/// Length in bytes every AWS secret access key has.
pub const SECRET_KEY_LENGTH: usize = 40;

/// Query strings kept in the canonicalized resource.
///
/// They are matched against the whole query, not per parameter.
pub const SUBRESOURCES: [&str; 2] = ["acl", "torrent"];
