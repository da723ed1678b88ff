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

use super::*;
use http::header::AUTHORIZATION;
use http::{Method, Request};
use s3sign_aws_v2::{sign, CanonicalRequest, RequestSigner, StaticCredentialProvider};
use s3sign_core::mac::OversizedKeyPolicy;
use s3sign_core::{Context, ErrorCategory, ErrorKind, Signer};
use test_case::test_case;

const DATE: &str = "Tue, 27 Mar 2007 19:36:42 +0000";

#[test_case(Method::GET, "http://johnsmith.s3.amazonaws.com/photos/puppy.jpg"; "http url")]
#[test_case(Method::GET, "https://johnsmith.s3.amazonaws.com/photos/puppy.jpg"; "https url")]
#[test_case(Method::GET, "johnsmith/photos/puppy.jpg"; "relative path")]
#[test_case(Method::GET, ""; "empty path")]
#[test_case(Method::PATCH, "/johnsmith/photos/puppy.jpg"; "unsupported method")]
#[test_case(Method::OPTIONS, "/johnsmith/photos/puppy.jpg"; "options")]
fn test_rejected_request(method: Method, resource: &str) {
    init_signing_test();

    let req = CanonicalRequest::new(method, resource).with_date(DATE);

    let err = sign(ACCESS_KEY_ID, SECRET_ACCESS_KEY.as_bytes(), &req).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert_eq!(err.category(), ErrorCategory::UserData);
    assert!(err.is_user_data_error());
}

#[test_case("x-amz-date"; "lower case")]
#[test_case("X-Amz-Date"; "canonical case")]
#[test_case("X-AMZ-DATE"; "upper case")]
fn test_rejected_amz_date(name: &str) {
    init_signing_test();

    let req = CanonicalRequest::new(Method::GET, "/johnsmith/photos/puppy.jpg")
        .with_date(DATE)
        .with_header(name, "Tue, 27 Mar 2007 19:36:42 +0000");

    let err = sign(ACCESS_KEY_ID, SECRET_ACCESS_KEY.as_bytes(), &req).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
}

#[test]
fn test_rejected_missing_date() {
    init_signing_test();

    let req = CanonicalRequest::new(Method::GET, "/johnsmith/photos/puppy.jpg");

    let err = sign(ACCESS_KEY_ID, SECRET_ACCESS_KEY.as_bytes(), &req).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
}

#[test]
fn test_rejected_oversized_key() {
    init_signing_test();

    let req = CanonicalRequest::new(Method::GET, "/johnsmith/photos/puppy.jpg").with_date(DATE);
    let cred = s3sign_aws_v2::Credential::new(ACCESS_KEY_ID, "k".repeat(65));

    let err = RequestSigner::new()
        .with_oversized_key_policy(OversizedKeyPolicy::Reject)
        .sign(&cred, &req)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::KeyUnsupported);
    assert_eq!(err.category(), ErrorCategory::UserData);
}

#[test]
fn test_signer_rejects_short_secret() {
    init_signing_test();

    let signer = Signer::new(
        Context::new(),
        StaticCredentialProvider::new(ACCESS_KEY_ID, "too-short"),
        RequestSigner::new(),
    );
    let req = Request::get("https://s3.amazonaws.com/johnsmith/photos/puppy.jpg")
        .header(http::header::DATE, DATE)
        .body(())
        .unwrap();
    let (mut parts, _) = req.into_parts();

    let err = signer.sign(&mut parts).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    assert_eq!(err.category(), ErrorCategory::UserData);
    assert!(!parts.headers.contains_key(AUTHORIZATION));
}
