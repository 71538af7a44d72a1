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

use crate::{Error, Result};
use bytes::Bytes;
use std::collections::HashMap;
use std::fmt::Debug;
use std::path::PathBuf;
use std::sync::Arc;

/// Context carries the I/O collaborators a signer may need: environment lookup,
/// file reading (for credentials files) and the transport that delivers signed
/// requests.
///
/// ## Important
///
/// Context provides NO default implementations. Any unconfigured component uses a
/// no-op implementation that returns errors or empty values when called.
///
/// ## Example
///
/// ```
/// use awsig_core::{Context, OsEnv};
///
/// let ctx = Context::new().with_env(OsEnv);
/// ```
#[derive(Clone)]
pub struct Context {
    fs: Arc<dyn FileRead>,
    http: Arc<dyn HttpSend>,
    env: Arc<dyn Env>,
}

impl Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("fs", &self.fs)
            .field("http", &self.http)
            .field("env", &self.env)
            .finish()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a new Context with no-op implementations.
    pub fn new() -> Self {
        Self {
            fs: Arc::new(NoopFileRead),
            http: Arc::new(NoopHttpSend),
            env: Arc::new(NoopEnv),
        }
    }

    /// Replace the file reader implementation.
    pub fn with_file_read(mut self, fs: impl FileRead) -> Self {
        self.fs = Arc::new(fs);
        self
    }

    /// Replace the HTTP transport implementation.
    pub fn with_http_send(mut self, http: impl HttpSend) -> Self {
        self.http = Arc::new(http);
        self
    }

    /// Replace the environment implementation.
    pub fn with_env(mut self, env: impl Env) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Read the file content entirely in `Vec<u8>`.
    #[inline]
    pub async fn file_read(&self, path: &str) -> Result<Vec<u8>> {
        self.fs.file_read(path).await
    }

    /// Read the file content entirely in `String`.
    ///
    /// Returns an [`ErrorKind::InvalidEncoding`](crate::ErrorKind::InvalidEncoding)
    /// error if the content is not valid utf-8.
    pub async fn file_read_as_string(&self, path: &str) -> Result<String> {
        let bytes = self.file_read(path).await?;
        Ok(String::from_utf8(bytes)?)
    }

    /// Hand a signed request to the transport and return its response.
    ///
    /// Errors are returned exactly as the transport reported them.
    #[inline]
    pub async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.http.http_send(req).await
    }

    /// Home directory reported by the configured [`Env`].
    #[inline]
    pub fn home_dir(&self) -> Option<PathBuf> {
        self.env.home_dir()
    }

    /// Resolve a leading `~/` (or `~\`) in a credentials file path.
    ///
    /// Paths without the prefix come back unchanged. `None` means the path
    /// needs a home directory and the environment has none.
    pub fn expand_home_dir(&self, path: &str) -> Option<String> {
        let Some(rest) = path.strip_prefix('~').filter(|r| r.starts_with(['/', '\\'])) else {
            return Some(path.to_string());
        };

        let home = self.home_dir()?;
        Some(format!("{}{rest}", home.to_string_lossy()))
    }

    /// Look up one variable, such as `AWS_REGION` or `AWS_PROFILE`.
    ///
    /// Unset variables and values that are not utf-8 both read as `None`.
    #[inline]
    pub fn env_var(&self, key: &str) -> Option<String> {
        self.env.var(key)
    }

    /// Snapshot of every variable visible to the configured [`Env`].
    #[inline]
    pub fn env_vars(&self) -> HashMap<String, String> {
        self.env.vars()
    }
}

/// FileRead loads a whole file, typically `~/.aws/credentials`.
#[async_trait::async_trait]
pub trait FileRead: Debug + Send + Sync + 'static {
    /// Return the full content of `path`.
    async fn file_read(&self, path: &str) -> Result<Vec<u8>>;
}

/// HttpSend is the transport that delivers a fully signed request.
///
/// The request handed over already carries every signed header, with values
/// rendered for transmission. Implementations must not add or rewrite headers,
/// since any change after signing invalidates the signature.
///
/// Network failures and service rejections (including signature mismatches) are
/// reported as [`ErrorKind::Transport`](crate::ErrorKind::Transport). The returned
/// future resolves exactly once, to either the response or the error.
#[async_trait::async_trait]
pub trait HttpSend: Debug + Send + Sync + 'static {
    /// Deliver `req` and hand back the service response.
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>>;
}

/// Env is where credential providers and [`Context`] look up `AWS_*` settings
/// and the home directory used to locate the shared credentials file.
pub trait Env: Debug + Send + Sync + 'static {
    /// Value of `key`, or `None` when it is unset or not utf-8.
    fn var(&self, key: &str) -> Option<String>;

    /// Every variable this environment exposes.
    fn vars(&self) -> HashMap<String, String>;

    /// Home directory, or `None` when it cannot be determined.
    fn home_dir(&self) -> Option<PathBuf>;
}

/// OsEnv reads the variables of the running process.
#[derive(Debug, Copy, Clone)]
pub struct OsEnv;

impl Env for OsEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn vars(&self) -> HashMap<String, String> {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        home::home_dir()
    }
}

/// StaticEnv serves a fixed set of variables instead of the process
/// environment.
///
/// Tests use it to hand `AWS_ACCESS_KEY_ID`, `AWS_PROFILE` and friends to a
/// provider without touching global state.
///
/// ```
/// use awsig_core::{Context, StaticEnv};
/// use std::collections::HashMap;
///
/// let ctx = Context::new().with_env(StaticEnv {
///     home_dir: None,
///     envs: HashMap::from([("AWS_REGION".to_string(), "us-east-1".to_string())]),
/// });
/// assert_eq!(ctx.env_var("AWS_REGION").as_deref(), Some("us-east-1"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    /// Directory `~` expands to. `None` leaves `~` paths unresolved.
    pub home_dir: Option<PathBuf>,
    /// Variables visible through [`Env::var`].
    pub envs: HashMap<String, String>,
}

impl Env for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.envs.get(key).cloned()
    }

    fn vars(&self) -> HashMap<String, String> {
        self.envs.clone()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home_dir.clone()
    }
}

/// Placeholder [`FileRead`] used until a reader is configured.
///
/// Every read fails, so a profile lookup without a reader surfaces as an error
/// rather than as a missing file.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFileRead;

#[async_trait::async_trait]
impl FileRead for NoopFileRead {
    async fn file_read(&self, path: &str) -> Result<Vec<u8>> {
        Err(Error::unexpected(format!(
            "cannot read {path}: no file reader configured in context"
        )))
    }
}

/// Placeholder [`HttpSend`]: signing works, sending fails with
/// [`ErrorKind::Transport`](crate::ErrorKind::Transport).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHttpSend;

#[async_trait::async_trait]
impl HttpSend for NoopHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        Err(Error::transport(format!(
            "cannot send {} {}: no http client configured in context",
            req.method(),
            req.uri()
        )))
    }
}

/// Placeholder [`Env`] with no variables and no home directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEnv;

impl Env for NoopEnv {
    fn var(&self, _: &str) -> Option<String> {
        None
    }

    fn vars(&self) -> HashMap<String, String> {
        HashMap::default()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        None
    }
}
