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

use crate::canonical::canonicalize;
use crate::constants::{ALGORITHM, AWS4_KEY_PREFIX, AWS4_REQUEST, X_AMZ_DATE, X_AMZ_SECURITY_TOKEN};
use crate::{Config, Credential};
use async_trait::async_trait;
use awsig_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use awsig_core::time::{format_date, format_iso8601, now, DateTime};
use awsig_core::{Context, Error, Result, SignRequest, SigningRequest, UNRESERVED_ENCODE_SET};
use http::request::Parts;
use http::{header, HeaderValue};
use log::debug;
use percent_encoding::utf8_percent_encode;
use std::fmt::{Debug, Display, Formatter};

/// The scope a signing key is bound to: `20150830/us-east-1/iam/aws4_request`.
///
/// The scope keeps the full signing instant, so the date it renders and the
/// timestamp of the string to sign always come from the same clock reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialScope {
    time: DateTime,
    region: String,
    service: String,
}

impl CredentialScope {
    /// Create a scope for the given instant, region and service.
    pub fn new(time: DateTime, region: &str, service: &str) -> Self {
        Self {
            time,
            region: region.to_string(),
            service: service.to_string(),
        }
    }

    /// The signing instant.
    pub fn time(&self) -> DateTime {
        self.time
    }

    /// The signing date: `20150830`.
    pub fn date(&self) -> String {
        format_date(self.time)
    }

    /// The region of this scope.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// The service of this scope.
    pub fn service(&self) -> &str {
        &self.service
    }
}

impl Display for CredentialScope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}/{AWS4_REQUEST}",
            self.date(),
            self.region,
            self.service
        )
    }
}

/// The final key of the derivation chain.
///
/// The key is neither `Clone` nor printable, and it is consumed by
/// [`assemble_authorization_header`].
pub struct SigningKey(Vec<u8>);

impl SigningKey {
    /// Raw bytes of the key.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("SigningKey(***)")
    }
}

/// Derive the signing key for `secret` within the date, region and service.
///
/// - [Derive a signing key](https://docs.aws.amazon.com/IAM/latest/UserGuide/create-signed-request.html#derive-signing-key)
pub fn derive_signing_key(secret: &str, time: DateTime, region: &str, service: &str) -> SigningKey {
    // Sign secret
    let secret = format!("{AWS4_KEY_PREFIX}{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), format_date(time).as_bytes());
    // Sign region
    let sign_region = hmac_sha256(sign_date.as_slice(), region.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_region.as_slice(), service.as_bytes());
    // Sign request
    let sign_request = hmac_sha256(sign_service.as_slice(), AWS4_REQUEST.as_bytes());

    SigningKey(sign_request)
}

/// Build the string to sign.
///
/// ```text
/// AWS4-HMAC-SHA256
/// 20150830T123600Z
/// 20150830/us-east-1/iam/aws4_request
/// <hashed_canonical_request>
/// ```
pub fn build_string_to_sign(scope: &CredentialScope, hashed_canonical_request: &str) -> String {
    format!(
        "{ALGORITHM}\n{}\n{scope}\n{hashed_canonical_request}",
        format_iso8601(scope.time())
    )
}

/// Sign `string_to_sign` and render the value of the `Authorization` header.
pub fn assemble_authorization_header(
    access_key_id: &str,
    signing_key: SigningKey,
    string_to_sign: &str,
    scope: &CredentialScope,
    signed_headers: &str,
) -> String {
    let signature = hex_hmac_sha256(signing_key.as_bytes(), string_to_sign.as_bytes());

    format!(
        "{ALGORITHM} Credential={access_key_id}/{scope}, SignedHeaders={signed_headers}, Signature={signature}"
    )
}

/// RequestSigner that implement AWS SigV4.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
#[derive(Debug, Clone)]
pub struct RequestSigner {
    service: String,
    region: String,

    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new signer for the service in the region.
    pub fn new(service: &str, region: &str) -> Self {
        Self {
            service: service.into(),
            region: region.into(),

            time: None,
        }
    }

    /// Create a new signer for the service, taking the region from `config`.
    pub fn from_config(service: &str, config: &Config) -> Result<Self> {
        let region = config.region.as_deref().ok_or_else(|| {
            Error::config_invalid(format!("region is required to sign requests for {service}"))
        })?;

        Ok(Self::new(service, region))
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Sign the request in place.
    ///
    /// `host`, `content-length`, `x-amz-date` and, for temporary credentials,
    /// `x-amz-security-token` are set before the canonical request is built,
    /// then `authorization` is attached. The query is written back sorted.
    ///
    /// On failure `req` keeps its original uri and headers.
    pub fn sign(&self, req: &mut Parts, body: &[u8], cred: &Credential) -> Result<()> {
        let scope = CredentialScope::new(self.time.unwrap_or_else(now), &self.region, &self.service);
        let mut signed_req = SigningRequest::build(req)?;
        let original = signed_req.headers.clone();

        if let Err(err) = self.sign_taken(&mut signed_req, body, cred, &scope) {
            debug!("signing failed, restoring request headers: {err}");
            req.headers = original;
            return Err(err);
        }

        // Apply to the request.
        signed_req.apply(req).inspect_err(|_| req.headers = original)
    }

    fn sign_taken(
        &self,
        signed_req: &mut SigningRequest,
        body: &[u8],
        cred: &Credential,
        scope: &CredentialScope,
    ) -> Result<()> {
        canonicalize_header(signed_req, cred, body, scope)?;

        let (creq, signed_headers) = canonicalize(
            &signed_req.method,
            &signed_req.path,
            &signed_req.query,
            &signed_req.headers,
            body,
        )?;
        debug!("calculated signed headers: {signed_headers}");

        let string_to_sign = build_string_to_sign(scope, &hex_sha256(creq.as_bytes()));
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key =
            derive_signing_key(&cred.secret_access_key, scope.time(), &self.region, &self.service);
        let mut authorization = HeaderValue::from_str(&assemble_authorization_header(
            &cred.access_key_id,
            signing_key,
            &string_to_sign,
            scope,
            &signed_headers,
        ))
        .map_err(|e| {
            Error::request_invalid("failed to create authorization header").with_source(e)
        })?;
        authorization.set_sensitive(true);
        signed_req
            .headers
            .insert(header::AUTHORIZATION, authorization);

        signed_req.query.sort_by_cached_key(|(k, v)| {
            (
                utf8_percent_encode(k, &UNRESERVED_ENCODE_SET).to_string(),
                utf8_percent_encode(v, &UNRESERVED_ENCODE_SET).to_string(),
            )
        });

        Ok(())
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _: &Context,
        req: &mut Parts,
        body: &[u8],
        credential: &Self::Credential,
    ) -> Result<()> {
        self.sign(req, body, credential)
    }
}

fn canonicalize_header(
    req: &mut SigningRequest,
    cred: &Credential,
    body: &[u8],
    scope: &CredentialScope,
) -> Result<()> {
    // Insert HOST header if not present.
    if req.headers.get(header::HOST).is_none() {
        let host = HeaderValue::from_str(req.authority.as_str()).map_err(|e| {
            Error::request_invalid("failed to parse authority as header value").with_source(e)
        })?;
        req.headers.insert(header::HOST, host);
    }

    req.headers
        .insert(header::CONTENT_LENGTH, HeaderValue::from(body.len()));

    // The date must come from the signing instant, never from the caller.
    let date = HeaderValue::from_str(&format_iso8601(scope.time()))?;
    req.headers.insert(X_AMZ_DATE, date);

    // Insert X_AMZ_SECURITY_TOKEN header if security token exists.
    if let Some(token) = &cred.session_token {
        let mut value = HeaderValue::from_str(token).map_err(|e| {
            Error::credential_invalid("session token is not a valid header value").with_source(e)
        })?;
        // Set token value sensitive to valid leaking.
        value.set_sensitive(true);

        req.headers.insert(X_AMZ_SECURITY_TOKEN, value);
    }

    Ok(())
}
