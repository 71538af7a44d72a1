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

use crate::constants::*;
use crate::Credential;
use async_trait::async_trait;
use awsig_core::{Context, Error, ProvideCredential, Result};
use ini::Ini;
use log::debug;

/// ProfileCredentialProvider loads AWS credentials from the shared credentials file.
///
/// The file is loaded from:
///
/// 1. The path specified via `with_credentials_file()`
/// 2. The `AWS_SHARED_CREDENTIALS_FILE` environment variable
/// 3. Default to `~/.aws/credentials`
///
/// The profile to use is determined by:
///
/// 1. The profile specified via `with_profile()`
/// 2. The `AWS_PROFILE` environment variable
/// 3. Default to "default"
///
/// A file that cannot be read, or a profile that is absent, yields no credential.
/// A file that cannot be parsed is an error.
#[derive(Debug, Default, Clone)]
pub struct ProfileCredentialProvider {
    profile: Option<String>,
    credentials_file: Option<String>,
}

impl ProfileCredentialProvider {
    /// Create a new ProfileCredentialProvider with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the profile name to use.
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Set the path to the credentials file.
    pub fn with_credentials_file(mut self, path: impl Into<String>) -> Self {
        self.credentials_file = Some(path.into());
        self
    }

    fn profile(&self, ctx: &Context) -> String {
        self.profile
            .clone()
            .or_else(|| ctx.env_var(AWS_PROFILE))
            .unwrap_or_else(|| DEFAULT_PROFILE.to_string())
    }

    fn credentials_file(&self, ctx: &Context) -> String {
        self.credentials_file
            .clone()
            .or_else(|| ctx.env_var(AWS_SHARED_CREDENTIALS_FILE))
            .unwrap_or_else(|| DEFAULT_SHARED_CREDENTIALS_FILE.to_string())
    }
}

#[async_trait]
impl ProvideCredential for ProfileCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let profile = self.profile(ctx);
        let path = self.credentials_file(ctx);

        let Some(expanded_path) = ctx.expand_home_dir(&path) else {
            debug!("failed to expand homedir for path: {path}");
            return Ok(None);
        };

        let content = match ctx.file_read(&expanded_path).await {
            Ok(content) => content,
            Err(err) => {
                debug!("failed to read credentials file {expanded_path}: {err}");
                return Ok(None);
            }
        };
        let content = String::from_utf8(content).map_err(|e| {
            Error::invalid_encoding(format!("credentials file {expanded_path} is not valid utf-8"))
                .with_source(e)
        })?;

        let conf = Ini::load_from_str(&content).map_err(|e| {
            Error::config_invalid(format!("failed to parse credentials file {expanded_path}"))
                .with_source(e)
        })?;

        let Some(props) = conf.section(Some(profile.as_str())) else {
            debug!("profile {profile} not found in credentials file {expanded_path}");
            return Ok(None);
        };

        match (
            props.get("aws_access_key_id"),
            props.get("aws_secret_access_key"),
        ) {
            (Some(ak), Some(sk)) => {
                debug!("loaded credential from profile {profile}");
                Ok(Some(Credential {
                    access_key_id: ak.to_string(),
                    secret_access_key: sk.to_string(),
                    session_token: props.get("aws_session_token").map(|s| s.to_string()),
                }))
            }
            _ => {
                debug!("profile {profile} does not carry a complete credential");
                Ok(None)
            }
        }
    }
}
