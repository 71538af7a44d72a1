use crate::constants::*;
use awsig_core::utils::Redact;
use awsig_core::Context;
use std::fmt::{Debug, Formatter};

/// Config for signing aws requests.
///
/// Config is a plain value: it is built once, passed to the providers and signers
/// that need it, and never consulted as process-wide state.
#[derive(Clone, Default)]
pub struct Config {
    /// `region` will be loaded from:
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_REGION`]
    /// - env value: [`AWS_DEFAULT_REGION`]
    ///
    /// Default to `None`, in which case the region must be given to the signer directly.
    pub region: Option<String>,
    /// `access_key_id` of the static credential.
    ///
    /// Default to `None`.
    pub access_key_id: Option<String>,
    /// `secret_access_key` of the static credential.
    ///
    /// Default to `None`.
    pub secret_access_key: Option<String>,
    /// `session_token` of the static credential.
    ///
    /// Default to `None`.
    pub session_token: Option<String>,
    /// `profile` selects the section of the shared credentials file, loaded from:
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_PROFILE`]
    /// - default to `default`
    pub profile: Option<String>,
    /// `shared_credentials_file` will be loaded from:
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_SHARED_CREDENTIALS_FILE`]
    /// - default to `~/.aws/credentials`
    pub shared_credentials_file: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("region", &self.region)
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("session_token", &Redact::from(&self.session_token))
            .field("profile", &self.profile)
            .field("shared_credentials_file", &self.shared_credentials_file)
            .finish()
    }
}

impl Config {
    /// Fill unset fields from the environment of `ctx`.
    ///
    /// Static credentials are not read here: environment credentials are handled by
    /// [`EnvCredentialProvider`](crate::EnvCredentialProvider) so that their precedence
    /// over the static ones stays explicit.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if self.region.is_none() {
            self.region = ctx
                .env_var(AWS_REGION)
                .or_else(|| ctx.env_var(AWS_DEFAULT_REGION));
        }
        if self.profile.is_none() {
            self.profile = ctx.env_var(AWS_PROFILE);
        }
        if self.shared_credentials_file.is_none() {
            self.shared_credentials_file = ctx.env_var(AWS_SHARED_CREDENTIALS_FILE);
        }

        self
    }
}
