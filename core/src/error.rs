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

use std::fmt;
use thiserror::Error;

/// The error type for s3sign operations
#[derive(Error, Debug)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Request cannot be signed (bad resource path, forbidden header, etc.)
    RequestInvalid,

    /// Credentials are missing or malformed, for example a secret key of
    /// unexpected size.
    CredentialInvalid,

    /// Secret key is longer than the hash block size and the signer was told
    /// not to shorten it.
    KeyUnsupported,

    /// Configuration error (missing fields, invalid values)
    ConfigInvalid,

    /// The hash or base64 primitive, or the surrounding environment, failed.
    EnvironmentInvalid,

    /// Unexpected errors
    Unexpected,
}

/// The broad category an [`ErrorKind`] falls into.
///
/// Callers that run as a process (a CLI for example) can map these onto
/// distinct exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The user supplied data that cannot be signed.
    UserData,
    /// An option or configuration value is invalid.
    InvalidOption,
    /// Something went wrong inside the signer itself.
    Internal,
    /// The environment can't provide what the signer needs.
    Environment,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error category
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    /// Check if this error was caused by user supplied data.
    pub fn is_user_data_error(&self) -> bool {
        self.category() == ErrorCategory::UserData
    }
}

// Convenience constructors
impl Error {
    /// Create a request invalid error
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create a credential invalid error
    pub fn credential_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialInvalid, message)
    }

    /// Create a key unsupported error
    pub fn key_unsupported(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::KeyUnsupported, message)
    }

    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create an environment invalid error
    pub fn environment_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::EnvironmentInvalid, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl ErrorKind {
    /// Map this kind onto its [`ErrorCategory`].
    pub fn category(&self) -> ErrorCategory {
        match self {
            ErrorKind::RequestInvalid
            | ErrorKind::CredentialInvalid
            | ErrorKind::KeyUnsupported => ErrorCategory::UserData,
            ErrorKind::ConfigInvalid => ErrorCategory::InvalidOption,
            ErrorKind::EnvironmentInvalid => ErrorCategory::Environment,
            ErrorKind::Unexpected => ErrorCategory::Internal,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::CredentialInvalid => write!(f, "invalid credentials"),
            ErrorKind::KeyUnsupported => write!(f, "unsupported key"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::EnvironmentInvalid => write!(f, "invalid environment"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::environment_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderName> for Error {
    fn from(err: http::header::InvalidHeaderName) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::ToStrError> for Error {
    fn from(err: http::header::ToStrError) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}
