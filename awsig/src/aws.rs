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

//! AWS service support with convenience APIs
//!
//! This module provides AWS signing functionality along with convenience functions
//! for common use cases.

// Re-export all AWS signing types
pub use awsig_aws_v4::*;

#[cfg(feature = "default-context")]
use crate::{default_context, Signer};

/// Default AWS Signer type with commonly used components
#[cfg(feature = "default-context")]
pub type DefaultSigner = Signer<Credential>;

/// Create a default AWS signer with standard configuration
///
/// This function creates a signer with:
/// - Default context (with Tokio file reader, reqwest HTTP client, OS environment)
/// - Default credential provider (env vars, then the shared credentials file)
/// - Request signer for the specified service and region
///
/// # Customization
///
/// You can customize the signer using the `with_*` methods:
///
/// ```no_run
/// use awsig::aws::{default_signer, Config, DefaultCredentialProvider};
/// use std::sync::Arc;
///
/// let config = Config {
///     profile: Some("logs-reader".to_string()),
///     ..Default::default()
/// };
/// let signer = default_signer("logs", "eu-west-1")
///     .with_credential_provider(DefaultCredentialProvider::with_config(Arc::new(config)));
/// ```
#[cfg(feature = "default-context")]
pub fn default_signer(service: &str, region: &str) -> DefaultSigner {
    let ctx = default_context();
    let provider = DefaultCredentialProvider::new();
    let signer = RequestSigner::new(service, region);
    Signer::new(ctx, provider, signer)
}
