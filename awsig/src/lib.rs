//! Signing AWS API requests with Signature Version 4.
//!
//! This crate bundles [`awsig_core`] and the AWS signer behind one import, and
//! offers a ready to use context when the `default-context` feature is on.
//!
//! ```no_run
//! # async fn example() -> awsig::Result<()> {
//! let signer = awsig::aws::default_signer("logs", "us-east-1");
//!
//! let mut req = http::Request::post("https://logs.us-east-1.amazonaws.com/")
//!     .header("x-amz-target", "Logs_20140328.DescribeLogGroups")
//!     .body(())?
//!     .into_parts()
//!     .0;
//! signer.sign(&mut req, br#"{"limit":5}"#).await?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use awsig_core::*;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::default_context;

pub mod aws;
