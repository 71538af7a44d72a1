//! AWS Signature Version 4 signer.
//!
//! This crate turns a request and a credential into the headers AWS expects:
//! the canonical request, the derived signing key, the string to sign and the
//! final `Authorization` header.
//!
//! ## Example
//!
//! ```no_run
//! use awsig_aws_v4::{DefaultCredentialProvider, RequestSigner};
//! use awsig_core::{Context, OsEnv, Result, Signer};
//! use awsig_file_read_tokio::TokioFileRead;
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new().with_file_read(TokioFileRead).with_env(OsEnv);
//! let signer = Signer::new(
//!     ctx,
//!     DefaultCredentialProvider::new(),
//!     RequestSigner::new("logs", "us-east-1"),
//! );
//!
//! let body = br#"{"limit":5}"#;
//! let mut parts = http::Request::post("https://logs.us-east-1.amazonaws.com/")
//!     .header("x-amz-target", "Logs_20140328.DescribeLogGroups")
//!     .body(())?
//!     .into_parts()
//!     .0;
//! signer.sign(&mut parts, body).await?;
//! # Ok(())
//! # }
//! ```
//!
//! The signing steps are also exposed one by one:
//!
//! - [`canonicalize`]: build the canonical request and the signed header list
//! - [`derive_signing_key`]: run the HMAC derivation chain
//! - [`build_string_to_sign`]: combine scope, timestamp and hashed request
//! - [`assemble_authorization_header`]: sign and format the header value

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod constants;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod canonical;
pub use canonical::{
    canonical_headers, canonical_query_string, canonical_uri, canonicalize,
    normalize_header_value,
};

mod sign_request;
pub use sign_request::{
    assemble_authorization_header, build_string_to_sign, derive_signing_key, CredentialScope,
    RequestSigner, SigningKey,
};

mod provide_credential;
pub use provide_credential::*;
